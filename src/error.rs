//! Error types for building the application database.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole build. No partial collection survives any of them.
#[derive(Debug, Error)]
pub enum AppDbError {
    /// `HOME` is unset, so there is no data-home fallback.
    #[error("HOME environment variable is not set")]
    MissingHome,

    /// Reading a candidate file, or listing an opened directory, failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppDbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single file was not turned into key/value pairs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first meaningful line was not `[Desktop Entry]`.
    #[error("not a valid desktop entry: missing [Desktop Entry] group header")]
    MissingGroupHeader,

    #[error("desktop entry has more than {limit} keys")]
    TooManyKeys { limit: usize },
}
