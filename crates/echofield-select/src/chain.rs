//! Selection chain for resolving the current theme.
//!
//! The [`SelectionChain`] tries each source in order and accepts the first
//! id the registry knows. Resolution never fails: when no source yields a
//! registered id, the registry default is used.

use std::fmt;
use std::sync::Arc;

use echofield_palette::ThemeRegistry;

use crate::cookie::CookieStore;
use crate::source::{ResolvedSelection, SelectionSource, SelectionSourceKind};
use crate::sources::{CookieSource, StorageSource};
use crate::store::KeyValueStore;

/// Chain of selection sources with a registry fallback.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use echofield_palette::ThemeRegistry;
/// use echofield_select::{CookieJar, MemoryStore, SelectionChain, SelectionSourceKind};
///
/// let registry = ThemeRegistry::builtin().unwrap();
/// let storage = Arc::new(MemoryStore::new().with("echofield-theme", "not-a-theme"));
/// let cookies = Arc::new(CookieJar::from_header("theme=nord"));
///
/// let resolved = SelectionChain::standard(registry, storage, cookies).resolve();
/// assert_eq!(resolved.id, "nord");
/// assert_eq!(resolved.source, SelectionSourceKind::Cookie);
/// ```
pub struct SelectionChain<'r> {
    registry: &'r ThemeRegistry,
    sources: Vec<Box<dyn SelectionSource>>,
}

impl<'r> SelectionChain<'r> {
    /// Create an empty chain that falls back to `registry`'s default.
    pub fn new(registry: &'r ThemeRegistry) -> Self {
        Self {
            registry,
            sources: Vec::new(),
        }
    }

    /// Storage first, then the cookie.
    pub fn standard(
        registry: &'r ThemeRegistry,
        storage: Arc<dyn KeyValueStore>,
        cookies: Arc<dyn CookieStore>,
    ) -> Self {
        Self::new(registry)
            .try_source(StorageSource::new(storage))
            .try_source(CookieSource::new(cookies))
    }

    /// Add a source to the chain.
    ///
    /// Sources are tried in the order they are added.
    pub fn try_source<S: SelectionSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Resolve and return the theme id.
    pub fn resolve_id(&self) -> String {
        self.resolve().id
    }

    /// Resolve and return the id with the source that provided it.
    ///
    /// Unregistered ids are skipped. A source whose store fails is logged
    /// and skipped.
    pub fn resolve(&self) -> ResolvedSelection {
        for source in &self.sources {
            let kind = source.kind();
            match source.read() {
                Ok(Some(id)) if self.registry.contains(&id) => {
                    tracing::debug!(%kind, id = %id, "resolved theme");
                    return ResolvedSelection { id, source: kind };
                }
                Ok(Some(id)) => {
                    tracing::debug!(%kind, id = %id, "ignoring unregistered theme");
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(%kind, error = %err, "failed to read theme selection");
                }
            }
        }

        ResolvedSelection {
            id: self.registry.default_id().to_string(),
            source: SelectionSourceKind::Default,
        }
    }

    /// Get the number of sources in the chain.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl fmt::Debug for SelectionChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionChain")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.kind()).collect::<Vec<_>>(),
            )
            .field("default", &self.registry.default_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CookieJar, FixedSource, MemoryStore, StoreError};

    fn registry() -> &'static ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    fn chain(stored: Option<&str>, cookie: &str) -> SelectionChain<'static> {
        let mut store = MemoryStore::new();
        if let Some(id) = stored {
            store = store.with(crate::THEME_STORAGE_KEY, id);
        }
        SelectionChain::standard(
            registry(),
            Arc::new(store),
            Arc::new(CookieJar::from_header(cookie)),
        )
    }

    struct BrokenSource;

    impl SelectionSource for BrokenSource {
        fn kind(&self) -> SelectionSourceKind {
            SelectionSourceKind::Storage
        }

        fn read(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "selection.yaml".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[test]
    fn empty_chain_uses_default() {
        let resolved = SelectionChain::new(registry()).resolve();
        assert_eq!(resolved.id, "macchiato");
        assert_eq!(resolved.source, SelectionSourceKind::Default);
    }

    #[test]
    fn storage_wins_over_cookie() {
        let resolved = chain(Some("latte"), "theme=nord").resolve();
        assert_eq!(resolved.id, "latte");
        assert_eq!(resolved.source, SelectionSourceKind::Storage);
    }

    #[test]
    fn cookie_used_when_storage_empty() {
        let resolved = chain(None, "theme=nord").resolve();
        assert_eq!(resolved.id, "nord");
        assert_eq!(resolved.source, SelectionSourceKind::Cookie);
    }

    #[test]
    fn unknown_stored_id_falls_through() {
        let resolved = chain(Some("solarized"), "theme=mocha").resolve();
        assert_eq!(resolved.id, "mocha");
        assert_eq!(resolved.source, SelectionSourceKind::Cookie);
    }

    #[test]
    fn nothing_valid_uses_default() {
        let resolved = chain(Some("bogus"), "theme=also-bogus").resolve();
        assert_eq!(resolved.id, "macchiato");
        assert_eq!(resolved.source, SelectionSourceKind::Default);
        assert_eq!(chain(None, "").resolve_id(), "macchiato");
    }

    #[test]
    fn duplicate_cookie_uses_default() {
        let resolved = chain(None, "theme=nord; theme=latte").resolve();
        assert_eq!(resolved.source, SelectionSourceKind::Default);
    }

    #[test]
    fn failing_source_is_skipped() {
        let resolved = SelectionChain::new(registry())
            .try_source(BrokenSource)
            .try_source(FixedSource::new("tokyo-night"))
            .resolve();
        assert_eq!(resolved.id, "tokyo-night");
        assert_eq!(resolved.source, SelectionSourceKind::Fixed);
    }

    #[test]
    fn fixed_source_first_overrides() {
        let chain = SelectionChain::new(registry())
            .try_source(FixedSource::new("gruvbox-light"))
            .try_source(StorageSource::new(Arc::new(
                MemoryStore::new().with(crate::THEME_STORAGE_KEY, "nord"),
            )));
        assert_eq!(chain.source_count(), 2);
        assert_eq!(chain.resolve_id(), "gruvbox-light");
    }

    #[test]
    fn debug_lists_source_kinds() {
        let debug = format!("{:?}", chain(None, ""));
        assert!(debug.contains("Storage"));
        assert!(debug.contains("Cookie"));
        assert!(debug.contains("macchiato"));
    }
}
