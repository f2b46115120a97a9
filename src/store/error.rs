//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type using [`StoreError`].
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by [`super::VariableStore`].
///
/// A variable that is simply absent is not an error: lookups return
/// `Ok(None)` and deletes return `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected input; the file was not touched.
    #[error("{0}")]
    Validation(&'static str),

    /// Reading, writing or replacing the file failed.
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup taken before a rewrite failed.
    #[error("backup failed: {0:#}")]
    Backup(anyhow::Error),
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
