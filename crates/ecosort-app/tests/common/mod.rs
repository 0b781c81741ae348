//! Shared test helpers for controller integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ecosort_app::{AppConfig, AppState, Capabilities, GameController};
use ecosort_catalog::{Catalog, eligible_items};
use ecosort_core::clock::Clock;
use ecosort_core::repository::{StatsRecord, StatsRepository};
use ecosort_core::rng::DeterministicRng;
use ecosort_test_support::{RecordingStatsRepository, SequenceRng};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(ecosort_test_support::fixed_clock())
}

/// Position of `item_key` in the round pool of `city_id`, usable as an RNG
/// value that draws that item.
pub fn item_index(city_id: &str, item_key: &str) -> u32 {
    let catalog = Catalog::builtin().unwrap();
    let city = catalog.get_city(city_id).unwrap();
    let position = eligible_items(&catalog, city)
        .iter()
        .position(|item| item.key == item_key)
        .unwrap();
    u32::try_from(position).unwrap()
}

/// An RNG that draws `item_key` in `city_id` for `rounds` rounds.
pub fn drawing(city_id: &str, item_key: &str, rounds: usize) -> SequenceRng {
    SequenceRng::repeating(item_index(city_id, item_key), rounds)
}

/// Build a controller over the built-in catalog with deterministic
/// Clock/RNG and the given stats repository.
pub async fn build_controller_with(
    rng: SequenceRng,
    repository: Arc<dyn StatsRepository>,
    config: AppConfig,
) -> GameController {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    build_controller_sharing_rng(rng, repository, config).await
}

/// Like [`build_controller_with`], but the caller keeps a handle on the RNG.
pub async fn build_controller_sharing_rng(
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    repository: Arc<dyn StatsRepository>,
    config: AppConfig,
) -> GameController {
    let state = AppState::new(
        Arc::new(Catalog::builtin().unwrap()),
        fixed_clock(),
        rng,
        repository,
        config,
    );
    GameController::new(state).await
}

/// Build a controller with every capability enabled and a recording stats
/// repository starting from `initial`.
pub async fn build_controller(
    rng: SequenceRng,
    initial: StatsRecord,
) -> (GameController, Arc<RecordingStatsRepository>) {
    let repository = Arc::new(RecordingStatsRepository::new(initial));
    let controller =
        build_controller_with(rng, repository.clone(), AppConfig::default()).await;
    (controller, repository)
}

/// Default configuration with some capabilities switched off.
pub fn config_with(capabilities: Capabilities) -> AppConfig {
    AppConfig {
        capabilities,
        ..AppConfig::default()
    }
}
