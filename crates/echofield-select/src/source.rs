//! Core selection source trait.
//!
//! The [`SelectionSource`] trait defines where a previously chosen theme id
//! can come from. Implementations are composed into a
//! [`SelectionChain`](crate::SelectionChain) that tries them in order.

use serde::Serialize;

use crate::StoreError;

/// A place a theme id may have been persisted.
///
/// # Implementation Guidelines
///
/// - [`read`](Self::read) returns `Ok(None)` when nothing is stored, so the
///   chain moves on. Return `Err` only when the backing store failed.
/// - Sources do not validate ids; the chain checks them against the registry.
pub trait SelectionSource: Send + Sync {
    /// Which kind of source this is, reported with the resolved id.
    fn kind(&self) -> SelectionSourceKind;

    /// Read the stored id, if any.
    fn read(&self) -> Result<Option<String>, StoreError>;
}

/// Information about how a theme was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSelection {
    /// The registered theme id.
    pub id: String,
    /// Which source provided it.
    pub source: SelectionSourceKind,
}

/// The kind of source that provided a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSourceKind {
    /// From key-value storage.
    Storage,
    /// From the theme cookie.
    Cookie,
    /// From an explicit override.
    Fixed,
    /// The registry default.
    Default,
}

impl std::fmt::Display for SelectionSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage => write!(f, "storage"),
            Self::Cookie => write!(f, "cookie"),
            Self::Fixed => write!(f, "fixed"),
            Self::Default => write!(f, "default"),
        }
    }
}
