//! Application state shared across handlers

use std::sync::Arc;

use application::CalendarFeedService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The credential-gated feed pipeline
    pub feed_service: Arc<CalendarFeedService>,
    /// Download filename for the Content-Disposition header
    pub feed_filename: Arc<str>,
}

impl AppState {
    /// Assemble the state handed to the router
    #[must_use]
    pub fn new(feed_service: Arc<CalendarFeedService>, feed_filename: &str) -> Self {
        Self {
            feed_service,
            feed_filename: Arc::from(feed_filename),
        }
    }
}
