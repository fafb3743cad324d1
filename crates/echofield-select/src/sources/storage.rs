//! Key-value storage source.

use std::sync::Arc;

use crate::source::{SelectionSource, SelectionSourceKind};
use crate::store::{KeyValueStore, THEME_STORAGE_KEY};
use crate::StoreError;

/// Read the theme id from key-value storage.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use echofield_select::{MemoryStore, SelectionSource, StorageSource};
///
/// let store = Arc::new(MemoryStore::new().with("echofield-theme", "nord"));
/// let source = StorageSource::new(store);
/// assert_eq!(source.read().unwrap().as_deref(), Some("nord"));
/// ```
#[derive(Clone)]
pub struct StorageSource {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StorageSource {
    /// Read from `store` under the standard theme key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: THEME_STORAGE_KEY.to_string(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SelectionSource for StorageSource {
    fn kind(&self) -> SelectionSourceKind {
        SelectionSourceKind::Storage
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.store.get(&self.key)?.filter(|value| !value.is_empty()))
    }
}

impl std::fmt::Debug for StorageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageSource")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
