//! Web server module
//!
//! Provides the HTTP API for SearchDigest.

mod handlers;
mod routes;
mod state;

pub use handlers::{ErrorBody, LiveResponse};
pub use routes::create_router;
pub use state::AppState;
