//! Document loading errors.

use crate::router::BuildError;

/// Errors from reading a network document and building a guide from it.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The described network cannot be routed
    #[error("invalid network: {0}")]
    Build(#[from] BuildError),
}
