//! Fatal errors
//!
//! Only snapshot I/O and serialization abort a run. Check failures are
//! reported through [`crate::Failure`] instead.

use std::path::PathBuf;

/// Reconciler error
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReconcileError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
