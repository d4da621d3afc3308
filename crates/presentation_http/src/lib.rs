//! Plancast HTTP presentation layer
//!
//! This crate provides the HTTP API for Plancast: the calendar feed
//! endpoint, the credential check endpoint, and health.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
