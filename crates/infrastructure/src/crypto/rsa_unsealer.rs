//! RSA-OAEP credential unsealer
//!
//! Callers encrypt `<identity><separator><secret>` against the deployment's
//! public key; this adapter holds the matching private key for the process
//! lifetime and reverses the operation. OAEP with SHA-256 and no label, so
//! a tampered or foreign ciphertext fails cleanly instead of yielding
//! garbage plaintext.

use std::path::Path;

use application::ports::{CredentialUnsealer, UnsealError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::PortalCredentials;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Oaep, RsaPrivateKey};
use sha2::Sha256;
use thiserror::Error;

/// Private key loading errors - all fatal at startup
#[derive(Debug, Error)]
pub enum KeyLoadError {
    /// Key file could not be read
    #[error("Failed to read private key file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// PEM block parsed but the key inside did not
    #[error("Failed to parse private key: {0}")]
    Parse(String),

    /// PEM label is neither PKCS#8 nor PKCS#1
    #[error("Unsupported PEM block in key file (expected PRIVATE KEY or RSA PRIVATE KEY)")]
    UnsupportedLabel,
}

/// Load an RSA private key from a PEM file.
///
/// Accepts both encodings in the wild: `PRIVATE KEY` (PKCS#8) and
/// `RSA PRIVATE KEY` (PKCS#1).
///
/// # Errors
///
/// Any failure here means no credential can ever be unsealed; callers must
/// treat it as fatal at startup, never fall back to a default.
pub fn load_private_key(path: &Path) -> Result<RsaPrivateKey, KeyLoadError> {
    let pem = std::fs::read_to_string(path).map_err(|source| KeyLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if pem.contains("BEGIN RSA PRIVATE KEY") {
        RsaPrivateKey::from_pkcs1_pem(&pem).map_err(|e| KeyLoadError::Parse(e.to_string()))
    } else if pem.contains("BEGIN PRIVATE KEY") {
        RsaPrivateKey::from_pkcs8_pem(&pem).map_err(|e| KeyLoadError::Parse(e.to_string()))
    } else {
        Err(KeyLoadError::UnsupportedLabel)
    }
}

/// [`CredentialUnsealer`] backed by an RSA private key
pub struct RsaCredentialUnsealer {
    key: RsaPrivateKey,
    separator: String,
}

impl std::fmt::Debug for RsaCredentialUnsealer {
    // The key material stays out of Debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaCredentialUnsealer")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl RsaCredentialUnsealer {
    /// Build an unsealer from an already-loaded key
    #[must_use]
    pub fn new(key: RsaPrivateKey, separator: impl Into<String>) -> Self {
        Self {
            key,
            separator: separator.into(),
        }
    }

    /// Load the key from a PEM file and build the unsealer
    ///
    /// # Errors
    ///
    /// See [`load_private_key`]; failures are fatal at startup.
    pub fn from_pem_file(
        path: &Path,
        separator: impl Into<String>,
    ) -> Result<Self, KeyLoadError> {
        Ok(Self::new(load_private_key(path)?, separator))
    }
}

impl CredentialUnsealer for RsaCredentialUnsealer {
    fn unseal(&self, ciphertext_b64: &str) -> Result<PortalCredentials, UnsealError> {
        let ciphertext = BASE64
            .decode(ciphertext_b64.trim())
            .map_err(|e| UnsealError::Decode(e.to_string()))?;

        // OAEP failures carry no distinguishing detail by design; treat the
        // input as hostile and say nothing about why it failed.
        let plaintext = self
            .key
            .decrypt(Oaep::new::<Sha256>(), &ciphertext)
            .map_err(|_| UnsealError::Decrypt)?;

        let text = String::from_utf8(plaintext).map_err(|_| UnsealError::NotText)?;

        PortalCredentials::from_plaintext(&text, &self.separator)
            .map_err(|_| UnsealError::MalformedCredential)
    }
}

#[cfg(test)]
mod tests {
    use rsa::RsaPublicKey;
    use rsa::pkcs8::EncodePrivateKey;
    use secrecy::ExposeSecret;

    use super::*;

    fn test_key() -> RsaPrivateKey {
        let mut rng = rand::thread_rng();
        RsaPrivateKey::new(&mut rng, 2048).unwrap()
    }

    fn seal(key: &RsaPrivateKey, plaintext: &str) -> String {
        let mut rng = rand::thread_rng();
        let public = RsaPublicKey::from(key);
        let ciphertext = public
            .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext.as_bytes())
            .unwrap();
        BASE64.encode(ciphertext)
    }

    #[test]
    fn round_trip_recovers_identity_and_secret() {
        let key = test_key();
        let unsealer = RsaCredentialUnsealer::new(key.clone(), ":::");
        let blob = seal(&key, "alice:::hunter2");

        let creds = unsealer.unseal(&blob).unwrap();
        assert_eq!(creds.identity(), "alice");
        assert_eq!(creds.secret().expose_secret(), "hunter2");
    }

    #[test]
    fn secret_containing_separator_survives() {
        let key = test_key();
        let unsealer = RsaCredentialUnsealer::new(key.clone(), ":::");
        let blob = seal(&key, "alice:::pa:::ss");

        let creds = unsealer.unseal(&blob).unwrap();
        assert_eq!(creds.secret().expose_secret(), "pa:::ss");
    }

    #[test]
    fn malformed_base64_is_a_decode_error() {
        let unsealer = RsaCredentialUnsealer::new(test_key(), ":::");
        let err = unsealer.unseal("not base64!!!").unwrap_err();
        assert!(matches!(err, UnsealError::Decode(_)));
    }

    #[test]
    fn wrong_key_is_a_decrypt_error() {
        let sealing_key = test_key();
        let unsealer = RsaCredentialUnsealer::new(test_key(), ":::");
        let blob = seal(&sealing_key, "alice:::hunter2");

        let err = unsealer.unseal(&blob).unwrap_err();
        assert!(matches!(err, UnsealError::Decrypt));
    }

    #[test]
    fn tampered_ciphertext_is_a_decrypt_error() {
        let key = test_key();
        let unsealer = RsaCredentialUnsealer::new(key.clone(), ":::");
        let blob = seal(&key, "alice:::hunter2");

        let mut bytes = BASE64.decode(blob).unwrap();
        bytes[0] ^= 0xff;
        let err = unsealer.unseal(&BASE64.encode(bytes)).unwrap_err();
        assert!(matches!(err, UnsealError::Decrypt));
    }

    #[test]
    fn missing_separator_is_malformed_not_a_panic() {
        let key = test_key();
        let unsealer = RsaCredentialUnsealer::new(key.clone(), ":::");
        let blob = seal(&key, "no separator in here");

        let err = unsealer.unseal(&blob).unwrap_err();
        assert!(matches!(err, UnsealError::MalformedCredential));
    }

    #[test]
    fn surrounding_whitespace_in_the_blob_is_tolerated() {
        let key = test_key();
        let unsealer = RsaCredentialUnsealer::new(key.clone(), ":::");
        let blob = format!("  {}\n", seal(&key, "alice:::pw"));

        assert!(unsealer.unseal(&blob).is_ok());
    }

    #[test]
    fn loads_pkcs8_pem_from_disk() {
        let key = test_key();
        let pem = key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.pem");
        std::fs::write(&path, pem.as_bytes()).unwrap();

        let loaded = load_private_key(&path).unwrap();
        assert_eq!(loaded, key);
    }

    #[test]
    fn loads_pkcs1_pem_from_disk() {
        use rsa::pkcs1::EncodeRsaPrivateKey;

        let key = test_key();
        let pem = key.to_pkcs1_pem(rsa::pkcs8::LineEnding::LF).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.pem");
        std::fs::write(&path, pem.as_bytes()).unwrap();

        let loaded = load_private_key(&path).unwrap();
        assert_eq!(loaded, key);
    }

    #[test]
    fn missing_key_file_is_an_io_error() {
        let err = load_private_key(Path::new("/nonexistent/private.pem")).unwrap_err();
        assert!(matches!(err, KeyLoadError::Io { .. }));
    }

    #[test]
    fn non_key_pem_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.pem");
        std::fs::write(&path, "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n")
            .unwrap();

        let err = load_private_key(&path).unwrap_err();
        assert!(matches!(err, KeyLoadError::UnsupportedLabel));
    }

    #[test]
    fn debug_output_omits_key_material() {
        let unsealer = RsaCredentialUnsealer::new(test_key(), ":::");
        let debug = format!("{unsealer:?}");
        assert!(debug.contains("separator"));
        assert!(!debug.contains("RsaPrivateKey"));
    }
}
