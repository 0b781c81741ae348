//! Key-value storage for the stats record.

mod file;
mod memory;
mod stats_repository;

use async_trait::async_trait;
use ecosort_core::error::DomainError;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use stats_repository::{KeyValueStatsRepository, STATS_KEY};

/// String key-value storage, the shape of browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), DomainError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
