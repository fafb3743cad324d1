//! Key-value storage for the selected theme.
//!
//! [`KeyValueStore`] stands in for the browser's local storage: a flat map of
//! string keys to string values that survives between page loads. Two
//! implementations are provided:
//!
//! - [`MemoryStore`]: process-local, used in tests and one-shot resolution
//! - [`FileStore`]: a YAML map on disk, rewritten on every `set`
//!
//! Stores take `&self` and lock internally so they can be shared behind an
//! `Arc` between a [`StorageSource`](crate::StorageSource) that reads and a
//! [`ThemeSwitcher`](crate::ThemeSwitcher) that writes.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::StoreError;

/// Storage key holding the selected theme id.
pub const THEME_STORAGE_KEY: &str = "echofield-theme";

/// Abstraction over persistent key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// === In-memory store ===

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that pre-populates `key`.
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }

    /// Snapshot of all entries.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// === File-backed store ===

/// Store persisted as a YAML map.
///
/// A missing or empty file reads as an empty store. Parent directories are
/// created on the first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_yaml::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        let text = serde_yaml::to_string(&values).map_err(StoreError::Serialize)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(&self.path, text).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(key, value, path = %self.path.display(), "stored selection");
        Ok(())
    }
}
