//! Application state for the web layer.

use std::sync::Arc;

use crate::service::TransitGuide;

/// Shared application state.
///
/// The guide is built before the server starts and never changes, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub guide: Arc<TransitGuide>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(guide: TransitGuide) -> Self {
        Self {
            guide: Arc::new(guide),
        }
    }
}
