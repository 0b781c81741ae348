//! Update rule for the lifetime stats record.

use chrono::{DateTime, Utc};
use ecosort_core::repository::StatsRecord;
use serde::{Deserialize, Serialize};

/// The parts of a finished game the lifetime record cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedGame {
    /// Score minus fines.
    pub net_score: i64,
    /// Longest streak of the game.
    pub longest_streak: u32,
}

/// Folds a completed game into the lifetime record.
///
/// The game count always grows by one; best score and longest streak only
/// ever grow.
#[must_use]
pub fn record_game(record: &StatsRecord, game: CompletedGame, now: DateTime<Utc>) -> StatsRecord {
    StatsRecord {
        total_games_played: record.total_games_played.saturating_add(1),
        best_score: record.best_score.max(game.net_score),
        longest_streak: record.longest_streak.max(game.longest_streak),
        last_updated: Some(now),
    }
}
