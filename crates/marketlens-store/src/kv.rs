use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// String-keyed, string-valued store with no native expiration.
///
/// Modeled as an injected dependency so the cache layer can run against a
/// durable file store in production and an in-memory fake in tests. Writers
/// to the same key are last-writer-wins; no coordination is provided.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if no entry exists.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any existing entry.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Process-durable store persisted as a single JSON object file.
///
/// The whole map is loaded at open and rewritten on every `set`. A missing or
/// unreadable file opens as an empty store rather than failing: the contents
/// are cache data, and losing them only costs recomputation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> HashMap<String, String> {
        let Ok(raw) = fs::read_to_string(path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| StoreError::Write(error.to_string()))?;
            }
        }

        let payload = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, payload).map_err(|error| StoreError::Write(error.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_and_get() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("key1"), None);

        store.set("key1", "value1").expect("set must succeed");
        assert_eq!(store.get("key1"), Some(String::from("value1")));

        store.set("key1", "value2").expect("set must succeed");
        assert_eq!(store.get("key1"), Some(String::from("value2")));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");

        let mut store = JsonFileStore::open(&path);
        store.set("key1", "value1").expect("set must succeed");
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("key1"), Some(String::from("value1")));
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        fs::write(&path, "not json {").expect("write fixture");

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("key"), None);
    }
}
