//! EcoSort — Game Session bounded context.
//!
//! Responsible for one player's game: starting it in a city, presenting
//! items round by round, scoring bin choices, and ending the game once the
//! round limit is reached.

pub mod application;
pub mod domain;

pub use domain::aggregates::{GamePhase, GameSession, GameSummary, RoundAdvance};
pub use domain::config::GameConfig;
