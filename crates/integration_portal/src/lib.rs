//! School portal integration
//!
//! HTTP client for the portal's private mobile API: token login and
//! planning retrieval.

pub mod client;
pub mod models;

pub use client::{HttpPortalClient, PortalConfig};
