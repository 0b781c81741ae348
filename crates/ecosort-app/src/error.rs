//! EcoSort — presentation-layer error types.

use ecosort_core::error::DomainError;
use ecosort_core::message::Message;
use serde::Serialize;
use thiserror::Error;

/// Startup errors of the app.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The built-in catalog failed to load.
    #[error("catalog error: {0}")]
    Catalog(#[source] DomainError),
}

/// What the front end shows for a failed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    /// Machine-readable error code.
    pub code: &'static str,
    /// Localizable text for the player.
    pub message: Message,
    /// Developer-facing description.
    pub detail: String,
}

/// Presentation-layer wrapper around `DomainError`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct UiError(pub DomainError);

impl From<DomainError> for UiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl UiError {
    /// Stable machine code of the error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match &self.0 {
            DomainError::CityNotFound(_) => "city_not_found",
            DomainError::EmptyCatalog(_) => "empty_catalog",
            DomainError::InvalidBin { .. } => "invalid_bin",
            DomainError::InvalidStateTransition { .. } => "invalid_state_transition",
            DomainError::Validation(_) => "validation_error",
            DomainError::Infrastructure(_) => "infrastructure_error",
        }
    }

    /// Builds the notice for the front end.
    #[must_use]
    pub fn notice(&self) -> ErrorNotice {
        let message = match &self.0 {
            DomainError::CityNotFound(city) => {
                Message::new("error_city_not_found").with_param("city", city)
            }
            DomainError::EmptyCatalog(city) => {
                Message::new("error_empty_catalog").with_param("city", city)
            }
            DomainError::InvalidBin { city_id, bin_id } => Message::new("error_invalid_bin")
                .with_param("bin", bin_id)
                .with_param("city", city_id),
            DomainError::InvalidStateTransition { .. } => Message::new("error_invalid_state"),
            DomainError::Validation(detail) => {
                Message::new("error_validation").with_param("detail", detail)
            }
            DomainError::Infrastructure(_) => Message::new("error_storage"),
        };
        ErrorNotice {
            code: self.code(),
            message,
            detail: self.0.to_string(),
        }
    }
}
