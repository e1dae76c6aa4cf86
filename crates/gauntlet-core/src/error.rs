//! Error types for batch benchmark operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GauntletError {
    #[error("Template {path:?} does not contain the {marker} placeholder")]
    MissingPlaceholder { path: PathBuf, marker: &'static str },

    #[error("No rating line with the {delimiter:?} delimiter found in engine output")]
    SummaryNotFound { delimiter: &'static str },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GauntletError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GauntletError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for batch benchmark operations
pub type Result<T> = std::result::Result<T, GauntletError>;
