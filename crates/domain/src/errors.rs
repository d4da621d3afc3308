//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Decrypted credential payload does not contain the separator.
    ///
    /// The message is deliberately payload-free: the plaintext holds a
    /// password and must never travel through an error chain.
    #[error("credential payload does not split into identity and secret")]
    MalformedCredential,

    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Date window bounds could not be parsed
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}
