//! Index error types.

/// Errors from looking things up in a [`TransitIndex`](super::TransitIndex).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// A distance was requested for a stop that was never added.
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// An accessor was asked for a key that is absent.
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl IndexError {
    pub(super) fn stop_not_found(name: &str) -> Self {
        IndexError::NotFound {
            kind: "stop",
            name: name.to_string(),
        }
    }

    pub(super) fn bus_not_found(name: &str) -> Self {
        IndexError::NotFound {
            kind: "bus",
            name: name.to_string(),
        }
    }
}
