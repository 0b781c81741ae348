//! Command handlers for the Player Statistics context.
//!
//! Load the record, apply the update rule, store the result.

use ecosort_core::clock::Clock;
use ecosort_core::error::DomainError;
use ecosort_core::repository::{StatsRecord, StatsRepository};
use serde::Serialize;

use crate::domain::achievements::Achievement;
use crate::domain::commands::{RecordCompletedGame, ResetStats};
use crate::domain::record::record_game;

/// Outcome of recording a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsUpdate {
    /// Record before the game.
    pub previous: StatsRecord,
    /// Record after the game, as stored.
    pub record: StatsRecord,
    /// Achievements this game unlocked.
    pub new_achievements: Vec<Achievement>,
}

/// Handles the `RecordCompletedGame` command: folds the game into the
/// stored record and saves it.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if loading or saving fails.
pub async fn handle_record_completed_game(
    command: &RecordCompletedGame,
    clock: &dyn Clock,
    repo: &dyn StatsRepository,
) -> Result<StatsUpdate, DomainError> {
    let previous = repo.load_stats().await?;
    let record = record_game(&previous, command.game, clock.now());
    repo.save_stats(&record).await?;

    let new_achievements = Achievement::newly_unlocked(&previous, &record);
    tracing::info!(
        correlation_id = %command.correlation_id,
        total_games_played = record.total_games_played,
        best_score = record.best_score,
        new_achievements = new_achievements.len(),
        "stats recorded"
    );
    Ok(StatsUpdate {
        previous,
        record,
        new_achievements,
    })
}

/// Handles the `ResetStats` command: stores an all-zero record.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if saving fails.
pub async fn handle_reset_stats(
    command: &ResetStats,
    repo: &dyn StatsRepository,
) -> Result<StatsRecord, DomainError> {
    let record = StatsRecord::default();
    repo.save_stats(&record).await?;
    tracing::info!(correlation_id = %command.correlation_id, "stats reset");
    Ok(record)
}
