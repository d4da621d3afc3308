//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application-layer ports: configuration loading and the
//! RSA credential unsealer backed by the process-held private key.

pub mod config;
pub mod crypto;

pub use config::{AppConfig, FeedConfig, PortalConfig, ServerConfig};
pub use crypto::{KeyLoadError, RsaCredentialUnsealer, load_private_key};
