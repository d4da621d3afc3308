//! API error handling
//!
//! Maps pipeline failures to HTTP statuses without leaking detail about
//! the credential payload. Everything arriving in `creds` is untrusted;
//! a caller probing the unsealer learns only "invalid credentials",
//! never which stage rejected the blob.

use application::{ApplicationError, ports::PortalError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller's input was unusable
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The portal rejected the unsealed credentials
    #[error("Unauthorized")]
    Unauthorized,

    /// The portal was unreachable or misbehaved
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// Our side failed
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "The portal rejected the credentials".to_string(),
            ),
            Self::UpstreamFailure(msg) => (StatusCode::BAD_GATEWAY, "upstream_failure", msg.clone()),
            // Internal detail stays in the logs, not the response
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_caller_fault() {
            // Deliberately uniform: no hint whether decoding, decryption or
            // the credential format failed.
            return Self::BadRequest("Invalid credentials payload".to_string());
        }
        match err {
            ApplicationError::Portal(PortalError::Auth) => Self::Unauthorized,
            ApplicationError::Portal(e) => Self::UpstreamFailure(e.to_string()),
            e => Self::Internal(e.to_string()),
        }
    }
}
