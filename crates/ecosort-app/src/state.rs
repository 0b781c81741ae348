//! Shared application state.

use std::fmt;
use std::sync::{Arc, Mutex};

use ecosort_catalog::Catalog;
use ecosort_core::clock::{Clock, SystemClock};
use ecosort_core::repository::StatsRepository;
use ecosort_core::rng::{DeterministicRng, StdDeterministicRng};
use ecosort_stats::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStatsRepository};

use crate::config::AppConfig;
use crate::error::AppError;

/// Collaborators shared by the controller.
#[derive(Clone)]
pub struct AppState {
    /// Immutable city and item data.
    pub catalog: Arc<Catalog>,
    /// Clock for deterministic time.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// RNG for item draws and confetti.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Lifetime stats store.
    pub stats_repository: Arc<dyn StatsRepository>,
    /// Configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        stats_repository: Arc<dyn StatsRepository>,
        config: AppConfig,
    ) -> Self {
        Self {
            catalog,
            clock,
            rng,
            stats_repository,
            config: Arc::new(config),
        }
    }

    /// Builds production state: the built-in catalog, the system clock, a
    /// seeded or entropy RNG, and a file or in-memory stats store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the built-in catalog is invalid.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let catalog = Catalog::builtin().map_err(AppError::Catalog)?;
        tracing::info!(
            cities = catalog.list_cities().len(),
            items = catalog.item_count(),
            "catalog loaded"
        );

        let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.rng_seed {
            Some(seed) => Arc::new(Mutex::new(StdDeterministicRng::seeded(seed))),
            None => Arc::new(Mutex::new(StdDeterministicRng::from_entropy())),
        };

        let stats_repository: Arc<dyn StatsRepository> = match &config.stats_dir {
            Some(dir) => Arc::new(KeyValueStatsRepository::new(FileKeyValueStore::new(
                dir.clone(),
            ))),
            None => Arc::new(KeyValueStatsRepository::new(InMemoryKeyValueStore::new())),
        };

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(SystemClock),
            rng,
            stats_repository,
            config,
        ))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("cities", &self.catalog.list_cities().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_builds_builtin_catalog() {
        let state = AppState::from_config(AppConfig {
            rng_seed: Some(1),
            ..AppConfig::default()
        })
        .unwrap();

        assert_eq!(state.catalog.list_cities().len(), 14);
        assert_eq!(state.config.rng_seed, Some(1));
    }
}
