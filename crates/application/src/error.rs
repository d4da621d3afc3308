//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::{PortalError, UnsealError};

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (credential format, timezone, date range)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credential unsealing failed
    #[error(transparent)]
    Unseal(#[from] UnsealError),

    /// Upstream portal error
    #[error(transparent)]
    Portal(#[from] PortalError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// True for errors caused by the caller's input rather than our side
    /// or the upstream's.
    #[must_use]
    pub const fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            Self::Unseal(_) | Self::Domain(DomainError::MalformedCredential)
        )
    }
}
