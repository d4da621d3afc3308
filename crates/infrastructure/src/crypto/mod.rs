//! Credential unsealing with the process-held RSA key

mod rsa_unsealer;

pub use rsa_unsealer::{KeyLoadError, RsaCredentialUnsealer, load_private_key};
