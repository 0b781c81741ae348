//! Shared test mocks and utilities for the EcoSort waste-sorting game.

mod clock;
mod repository;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use repository::{EmptyStatsRepository, FailingStatsRepository, RecordingStatsRepository};
pub use rng::{MockRng, SequenceRng};
