//! Fixed value source.

use crate::source::{SelectionSource, SelectionSourceKind};
use crate::StoreError;

/// Always provides the configured id.
///
/// Put it first in a chain to force a theme, e.g. for previews. The id still
/// has to be registered; an unknown one falls through like any stored value.
#[derive(Debug, Clone)]
pub struct FixedSource {
    id: String,
}

impl FixedSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl SelectionSource for FixedSource {
    fn kind(&self) -> SelectionSourceKind {
        SelectionSourceKind::Fixed
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(Some(self.id.clone()))
    }
}
