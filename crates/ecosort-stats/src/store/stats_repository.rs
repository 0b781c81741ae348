//! `StatsRepository` over a key-value store.

use async_trait::async_trait;
use ecosort_core::error::DomainError;
use ecosort_core::repository::{StatsRecord, StatsRepository};

use super::KeyValueStore;

/// Key the stats record is stored under.
pub const STATS_KEY: &str = "ecoSortGermanyStats";

/// Stores the stats record as camelCase JSON under [`STATS_KEY`].
#[derive(Debug)]
pub struct KeyValueStatsRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KeyValueStatsRepository<S> {
    /// Wraps `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deletes the stored record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store fails.
    pub async fn clear(&self) -> Result<(), DomainError> {
        self.store.remove(STATS_KEY).await
    }
}

#[async_trait]
impl<S: KeyValueStore> StatsRepository for KeyValueStatsRepository<S> {
    async fn load_stats(&self) -> Result<StatsRecord, DomainError> {
        let Some(raw) = self.store.get(STATS_KEY).await? else {
            return Ok(StatsRecord::default());
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::warn!(key = STATS_KEY, error = %e, "stored stats unreadable; starting from zero");
                Ok(StatsRecord::default())
            }
        }
    }

    async fn save_stats(&self, record: &StatsRecord) -> Result<(), DomainError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| DomainError::Infrastructure(format!("stats serialization failed: {e}")))?;
        self.store.set(STATS_KEY, raw).await
    }
}
