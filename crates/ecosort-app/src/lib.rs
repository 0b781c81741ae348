//! EcoSort — presentation adapter.
//!
//! One controller drives the game for any front end. Optional features
//! (sound cues, difficulty selection, stats persistence) are switched by
//! [`config::Capabilities`] instead of living in separate screens.

pub mod celebration;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod input;
pub mod sound;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, Capabilities};
pub use controller::GameController;
pub use error::{AppError, ErrorNotice, UiError};
pub use state::AppState;
