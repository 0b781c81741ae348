//! Persistence port for lifetime player statistics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifetime statistics that outlive a single game.
///
/// Every field defaults when absent so records written by older builds
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsRecord {
    /// Number of completed games.
    pub total_games_played: u32,
    /// Highest net score (`score - fines`) of any completed game.
    pub best_score: i64,
    /// Longest streak reached in any completed game.
    pub longest_streak: u32,
    /// When the record was last written.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Repository trait for loading and storing the stats record.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Load the stored record. A store with nothing saved yet returns the
    /// default record.
    async fn load_stats(&self) -> Result<StatsRecord, DomainError>;

    /// Replace the stored record.
    async fn save_stats(&self, record: &StatsRecord) -> Result<(), DomainError>;
}
