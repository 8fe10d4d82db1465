//! Durable key-value storage capability (the `localStorage` analog).

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Durable key-value store.
///
/// Read failures are treated as "no preference" by the resolver; write
/// failures are logged by the session and never fatal.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, the baseline for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One stored value plus the moment it was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageRecord {
    value: String,
    updated_at: String,
}

/// File-backed store: a JSON document mapping keys to timestamped records.
///
/// The document is re-read on every access; concurrent writers follow
/// last-write-wins, same as two tabs sharing a browser store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> FileStorage {
        FileStorage { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, StorageRecord>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Storage file {} is not valid JSON", self.path.display()))
    }

    fn store(&self, entries: &BTreeMap<String, StorageRecord>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries).context("Failed to encode storage")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write storage file {}", self.path.display()))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).map(|record| record.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(
            key.to_string(),
            StorageRecord {
                value: value.to_string(),
                updated_at: Utc::now().to_rfc3339(),
            },
        );
        self.store(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStorage Tests ====================

    #[test]
    fn test_memory_get_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("language").unwrap(), None);
    }

    #[test]
    fn test_memory_set_then_get() {
        let mut storage = MemoryStorage::new();
        storage.set("language", "ua").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("ua".to_string()));
    }

    #[test]
    fn test_memory_set_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set("language", "ua").unwrap();
        storage.set("language", "ru").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("ru".to_string()));
    }

    // ==================== FileStorage Tests ====================

    #[test]
    fn test_file_get_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::new(dir.path().join("store.json"));
        assert_eq!(storage.get("language").unwrap(), None);
    }

    #[test]
    fn test_file_set_then_get() {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = FileStorage::new(dir.path().join("store.json"));

        storage.set("language", "ru").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("ru".to_string()));
    }

    #[test]
    fn test_file_persists_across_instances() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");

        let mut writer = FileStorage::new(&path);
        writer.set("language", "ua").unwrap();

        let reader = FileStorage::new(&path);
        assert_eq!(reader.get("language").unwrap(), Some("ua".to_string()));
    }

    #[test]
    fn test_file_records_update_timestamp() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");

        let mut storage = FileStorage::new(&path);
        storage.set("language", "ua").unwrap();

        let raw = std::fs::read_to_string(&path).expect("read");
        let entries: BTreeMap<String, StorageRecord> =
            serde_json::from_str(&raw).expect("decode");
        let record = entries.get("language").expect("record");

        assert_eq!(record.value, "ua");
        // RFC 3339 timestamps parse back
        assert!(chrono::DateTime::parse_from_rfc3339(&record.updated_at).is_ok());
    }

    #[test]
    fn test_file_corrupt_document_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").expect("write");

        let storage = FileStorage::new(&path);
        let err = storage.get("language").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_file_preserves_other_keys() {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = FileStorage::new(dir.path().join("store.json"));

        storage.set("language", "ua").unwrap();
        storage.set("theme", "dark").unwrap();
        storage.set("language", "ru").unwrap();

        assert_eq!(storage.get("language").unwrap(), Some("ru".to_string()));
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_string()));
    }
}
