//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::Pipeline;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Search pipeline
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let pipeline = Arc::new(Pipeline::new(Arc::new(settings), client));

        Self { pipeline }
    }
}
