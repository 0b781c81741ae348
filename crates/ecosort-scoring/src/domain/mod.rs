//! Domain layer for the Scoring context.

pub mod outcome;
pub mod rules;
