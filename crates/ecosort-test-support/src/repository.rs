//! Test repositories — mock `StatsRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use ecosort_core::error::DomainError;
use ecosort_core::repository::{StatsRecord, StatsRepository};

/// A stats repository that returns the configured record from every
/// `load_stats` call and records every `save_stats` call.
#[derive(Debug)]
pub struct RecordingStatsRepository {
    load_result: Mutex<StatsRecord>,
    saved: Mutex<Vec<StatsRecord>>,
}

impl RecordingStatsRepository {
    /// Create a new recording repository that will return `load_result` from
    /// every `load_stats` call until a record is saved.
    #[must_use]
    pub fn new(load_result: StatsRecord) -> Self {
        Self {
            load_result: Mutex::new(load_result),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all records that were saved.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_records(&self) -> Vec<StatsRecord> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsRepository for RecordingStatsRepository {
    async fn load_stats(&self) -> Result<StatsRecord, DomainError> {
        Ok(self.load_result.lock().unwrap().clone())
    }

    async fn save_stats(&self, record: &StatsRecord) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push(record.clone());
        // Later loads observe the latest save, like a real store.
        *self.load_result.lock().unwrap() = record.clone();
        Ok(())
    }
}

/// A stats repository that always loads the default record and silently
/// discards saves. Useful when persistence is irrelevant to the test.
#[derive(Debug)]
pub struct EmptyStatsRepository;

#[async_trait]
impl StatsRepository for EmptyStatsRepository {
    async fn load_stats(&self) -> Result<StatsRecord, DomainError> {
        Ok(StatsRecord::default())
    }

    async fn save_stats(&self, _record: &StatsRecord) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A stats repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingStatsRepository;

#[async_trait]
impl StatsRepository for FailingStatsRepository {
    async fn load_stats(&self) -> Result<StatsRecord, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    async fn save_stats(&self, _record: &StatsRecord) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
