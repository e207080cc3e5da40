//! Shared application state.

use std::sync::Arc;

use location_history_core::repository::HistoryRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The history repository behind all location endpoints.
    pub history: Arc<dyn HistoryRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }
}
