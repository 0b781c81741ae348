//! Directory-backed key-value store, one file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ecosort_core::error::DomainError;

use super::KeyValueStore;

/// A `KeyValueStore` that keeps each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::Validation(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("failed to {action} {}: {e}", path.display()))
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &path, &e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error("create", &self.dir, &e))?;

        // Atomic replace.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| io_error("write", &tmp, &e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("replace", &path, &e))
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", &path, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ecosort-{name}-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        // Arrange
        let dir = temp_dir("kv");
        let store = FileKeyValueStore::new(&dir);

        // Act
        store.set("ecoSortGermanyStats", "{}".to_owned()).await.unwrap();
        let reopened = FileKeyValueStore::new(&dir);
        let value = reopened.get("ecoSortGermanyStats").await.unwrap();

        // Assert
        assert_eq!(value.as_deref(), Some("{}"));
        assert!(dir.join("ecoSortGermanyStats.json").exists());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_reads_as_empty() {
        let store = FileKeyValueStore::new(temp_dir("absent"));

        assert!(store.get("anything").await.unwrap().is_none());
        assert!(store.remove("anything").await.is_ok());
    }

    #[tokio::test]
    async fn test_path_like_keys_are_rejected() {
        let store = FileKeyValueStore::new(temp_dir("keys"));

        let result = store.set("../escape", "x".to_owned()).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
