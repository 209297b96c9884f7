//! Error types for loading marks from a waypoint source.

use std::path::PathBuf;

/// Result type for mark store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure to produce the mark list. Loads never return partial data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The waypoint file could not be read.
    #[error("Failed to read waypoint file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The waypoint file is not valid GPX.
    #[error("Malformed waypoint file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Two waypoints share the same name.
    #[error("Duplicate mark '{id}' in {path}")]
    DuplicateMark { path: PathBuf, id: String },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
