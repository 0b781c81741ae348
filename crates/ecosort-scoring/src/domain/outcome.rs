//! Per-answer results and per-game counters.

use serde::{Deserialize, Serialize};

/// Correct and wrong answer counters of one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Correct answers.
    pub correct: u32,
    /// Wrong answers.
    pub wrong: u32,
}

impl GameStats {
    /// Number of answered rounds.
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Share of correct answers in `[0.0, 1.0]`; `0.0` before any answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let answered = self.answered();
        if answered == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(answered)
    }

    /// Accuracy as a whole percentage, rounded half up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}

/// What a single bin choice did, for transient feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Round the choice was made in.
    pub round: u32,
    /// Whether the choice was right.
    pub is_correct: bool,
    /// The bin the player chose.
    pub chosen_bin: String,
    /// The bin the item belongs to.
    pub correct_bin: String,
    /// Points added (base + bonus); absent on a wrong choice.
    pub points_awarded: Option<u32>,
    /// Bonus part of `points_awarded`.
    pub bonus_points: u32,
    /// Streak after the choice.
    pub streak_after: u32,
    /// Fine added; absent on a correct choice.
    pub fine_delta: Option<u32>,
    /// True if no further round follows.
    pub is_final_round: bool,
}
