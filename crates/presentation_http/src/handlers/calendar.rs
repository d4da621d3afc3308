//! Calendar feed handlers
//!
//! Both endpoints take the sealed credential blob as a `creds` query
//! parameter, because calendar subscribers (Google Calendar, Apple
//! Calendar) can only fetch plain GET URLs. The blob is ciphertext, so a
//! leaked subscription URL exposes no password, only feed access until
//! the key is rotated.

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the credential-gated endpoints
#[derive(Debug, Deserialize)]
pub struct CredentialQuery {
    /// Base64 RSA-OAEP sealed credential blob
    pub creds: String,
}

/// GET /calendar.ics - run the full pipeline and return the ICS document
pub async fn calendar_feed(
    State(state): State<AppState>,
    Query(query): Query<CredentialQuery>,
) -> Result<Response, ApiError> {
    let ics = state.feed_service.generate_feed(&query.creds).await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/calendar; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", state.feed_filename),
        ),
    ];

    Ok((headers, ics).into_response())
}

/// GET /validate - unseal and authenticate without fetching the schedule
///
/// Lets a client confirm a freshly sealed blob before publishing the
/// subscription URL. Answers 204 so no body needs parsing.
pub async fn validate_credentials(
    State(state): State<AppState>,
    Query(query): Query<CredentialQuery>,
) -> Result<StatusCode, ApiError> {
    state.feed_service.validate_credentials(&query.creds).await?;
    Ok(StatusCode::NO_CONTENT)
}
