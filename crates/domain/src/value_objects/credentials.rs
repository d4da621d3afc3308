//! Portal credentials
//!
//! The identity/secret pair recovered from an unsealed credential blob.
//! The secret lives in a [`SecretString`] so it is zeroized on drop and
//! redacted from `Debug` output.

use secrecy::SecretString;

use crate::errors::DomainError;

/// An identity/secret pair for the upstream portal
#[derive(Debug, Clone)]
pub struct PortalCredentials {
    identity: String,
    secret: SecretString,
}

impl PortalCredentials {
    /// Create credentials from already-split parts
    #[must_use]
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Split an unsealed plaintext of the form `<identity><separator><secret>`.
    ///
    /// The split happens at the FIRST occurrence of the separator, and the
    /// remainder becomes the secret verbatim. A secret containing the
    /// separator therefore survives intact; an identity containing it does
    /// not. That asymmetry is a format constraint on callers encrypting the
    /// blob: the identity must never contain the separator.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedCredential`] when the separator is
    /// empty or does not occur in the plaintext.
    pub fn from_plaintext(plaintext: &str, separator: &str) -> Result<Self, DomainError> {
        if separator.is_empty() {
            return Err(DomainError::MalformedCredential);
        }
        let (identity, secret) = plaintext
            .split_once(separator)
            .ok_or(DomainError::MalformedCredential)?;
        Ok(Self::new(identity, secret))
    }

    /// The portal login identity
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The portal password, still sealed in a [`SecretString`]
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}
