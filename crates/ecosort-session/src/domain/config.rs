//! Per-game configuration.

use ecosort_scoring::ScoringRules;
use serde::{Deserialize, Serialize};

/// Settings fixed for a game when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds after which the game ends; `None` plays forever.
    pub round_limit: Option<u32>,
    /// Points, fines and streak bonus.
    pub rules: ScoringRules,
}

impl GameConfig {
    /// A game without a round limit.
    #[must_use]
    pub fn unbounded(rules: ScoringRules) -> Self {
        Self {
            round_limit: None,
            rules,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: Some(10),
            rules: ScoringRules::default(),
        }
    }
}
