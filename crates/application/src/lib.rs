//! Application layer - Use cases and orchestration
//!
//! Defines the ports the pipeline depends on (credential unsealing, portal
//! access) and the services that orchestrate them into the calendar feed.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
