//! Query handlers for the Player Statistics context.

use chrono::{DateTime, Utc};
use ecosort_core::error::DomainError;
use ecosort_core::repository::{StatsRecord, StatsRepository};
use serde::Serialize;

use crate::domain::achievements::Achievement;

/// Read-only view of one achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementView {
    /// Stable identifier.
    pub id: &'static str,
    /// Localization key of the title.
    pub message_key: &'static str,
    /// Badge icon.
    pub icon: &'static str,
    /// Whether the badge is earned.
    pub unlocked: bool,
}

/// Read-only view of the lifetime record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    /// Number of completed games.
    pub total_games_played: u32,
    /// Highest net score.
    pub best_score: i64,
    /// Longest streak.
    pub longest_streak: u32,
    /// When the record was last written.
    pub last_updated: Option<DateTime<Utc>>,
    /// Every achievement with its unlock state.
    pub achievements: Vec<AchievementView>,
}

/// Builds the view of `record`.
#[must_use]
pub fn stats_view(record: &StatsRecord) -> StatsView {
    StatsView {
        total_games_played: record.total_games_played,
        best_score: record.best_score,
        longest_streak: record.longest_streak,
        last_updated: record.last_updated,
        achievements: Achievement::ALL
            .into_iter()
            .map(|a| AchievementView {
                id: a.id(),
                message_key: a.message_key(),
                icon: a.icon(),
                unlocked: a.is_unlocked(record),
            })
            .collect(),
    }
}

/// Loads the stored record and returns its view.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if loading fails.
pub async fn get_stats(repo: &dyn StatsRepository) -> Result<StatsView, DomainError> {
    let record = repo.load_stats().await?;
    Ok(stats_view(&record))
}
