//! Web layer for the transit guide.
//!
//! Serves stat requests over HTTP against one built guide.

mod routes;
mod state;

pub use routes::{AppError, ErrorResponse, create_router};
pub use state::AppState;
