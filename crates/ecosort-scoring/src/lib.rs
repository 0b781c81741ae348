//! EcoSort — Scoring bounded context.
//!
//! Responsible for deciding what a sorted item is worth: base points,
//! streak bonuses, fines, and the derived accuracy of a game.

pub mod domain;

pub use domain::outcome::{GameStats, ScoringResult};
pub use domain::rules::{RoundScore, ScoringRules, StreakBonus};
