//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Calendar feed
        .route("/calendar.ics", get(handlers::calendar::calendar_feed))
        // Credential check
        .route("/validate", get(handlers::calendar::validate_credentials))
        // Attach state
        .with_state(state)
}
