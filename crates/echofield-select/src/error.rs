//! Error types for selection storage.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing a selection store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file is not a map of strings.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The in-memory map could not be serialized.
    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = StoreError::io(
            "/tmp/selection.yaml",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/selection.yaml"));
        assert!(msg.contains("gone"));
    }
}
