//! EcoSort — Player Statistics bounded context.
//!
//! Responsible for the lifetime record that outlives a single game: games
//! played, best score, longest streak, the achievements derived from them,
//! and storing that record in a key-value store.

pub mod application;
pub mod domain;
pub mod store;

pub use domain::achievements::Achievement;
pub use domain::record::{CompletedGame, record_game};
pub use store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStatsRepository, KeyValueStore, STATS_KEY};
