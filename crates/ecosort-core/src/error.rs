//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No city with the given id exists in the catalog.
    #[error("city not found: {0}")]
    CityNotFound(String),

    /// The city has no item that can be drawn for a round.
    #[error("city {0} has no eligible items")]
    EmptyCatalog(String),

    /// The chosen bin does not belong to the active city.
    #[error("bin {bin_id} does not exist in city {city_id}")]
    InvalidBin {
        /// The active city.
        city_id: String,
        /// The offending bin id.
        bin_id: String,
    },

    /// An operation was invoked in a phase that does not allow it.
    #[error("cannot {action} while session is {phase}")]
    InvalidStateTransition {
        /// The phase the session was in.
        phase: String,
        /// The attempted operation.
        action: &'static str,
    },

    /// A validation error in domain logic or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
