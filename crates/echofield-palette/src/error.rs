//! Error types for palette operations.
//!
//! This module provides [`PaletteError`], the error returned by operations that
//! touch the outside world. Pure functions in this crate do not fail; registry
//! validation reports [`RegistryError`](crate::RegistryError) and stylesheet
//! inspection reports [`InspectError`](crate::inspect::InspectError).

use std::path::PathBuf;

use crate::inspect::InspectError;
use crate::theme::RegistryError;

/// Error type for generation and verification runs.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// The theme table failed validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Writing the generated stylesheet failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an existing stylesheet failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing stylesheet does not match the registry.
    #[error("{} is out of date: {source}", path.display())]
    Stale {
        path: PathBuf,
        #[source]
        source: InspectError,
    },
}
