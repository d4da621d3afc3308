//! Credential unsealing port
//!
//! Turns a caller-supplied encrypted blob back into a portal identity and
//! secret. Implemented in the infrastructure layer with the process-held
//! RSA private key.

use domain::PortalCredentials;
use thiserror::Error;

/// Unsealing errors
///
/// Variants deliberately carry no ciphertext and no plaintext: a failed
/// decryption is untrusted input and must not leak through error chains
/// or logs.
#[derive(Debug, Error)]
pub enum UnsealError {
    /// The blob is not valid base64
    #[error("Invalid credential encoding: {0}")]
    Decode(String),

    /// OAEP decryption failed (wrong key, corrupted or tampered ciphertext)
    #[error("Credential decryption failed")]
    Decrypt,

    /// The decrypted payload is not UTF-8 text
    #[error("Decrypted credential is not valid text")]
    NotText,

    /// The payload does not split into identity and secret
    #[error("Credential format is invalid")]
    MalformedCredential,
}

/// Unseals encrypted credential blobs
pub trait CredentialUnsealer: Send + Sync {
    /// Decrypt and split a base64-encoded credential blob
    ///
    /// # Errors
    ///
    /// See [`UnsealError`] for the failure taxonomy.
    fn unseal(&self, ciphertext_b64: &str) -> Result<PortalCredentials, UnsealError>;
}
