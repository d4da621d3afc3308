//! Portal port for the application layer
//!
//! Defines the interface to the school portal's private API: one login that
//! yields a bearer token, one schedule fetch scoped to that token. The
//! integration layer implements it; the feed service only sees this trait,
//! so an alternative login strategy (the portal has had several) would slot
//! in behind the same seam.

use async_trait::async_trait;
use domain::{DateRange, PortalCredentials};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portal client errors
#[derive(Debug, Error)]
pub enum PortalError {
    /// The portal rejected the identity/secret pair
    #[error("Portal rejected the credentials")]
    Auth,

    /// Connection to the portal failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Non-success HTTP status from the portal
    #[error("Portal returned HTTP {status}")]
    Upstream { status: u16 },

    /// Portal response body could not be parsed
    #[error("Unparsable portal response: {0}")]
    Parse(String),
}

/// A short-lived bearer token scoped to one identity
///
/// Used to authorize exactly one schedule fetch; never cached or reused
/// across requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token returned by the portal's login endpoint
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization: Bearer` header
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    // Bearer tokens do not belong in logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(len={})", self.0.len())
    }
}

/// The favorite descriptor nested in a planning entry
///
/// Field-to-role mapping is fixed by the upstream data contract: f2 is the
/// location, f3 and f5 are summary fragments (rendered f5 then f3), f4 is
/// the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteDescriptor {
    /// Room or site (upstream f2)
    pub location: String,
    /// Second summary fragment (upstream f3)
    pub summary_suffix: String,
    /// Free-text details, typically the lecturer (upstream f4)
    pub description: String,
    /// First summary fragment (upstream f5)
    pub summary_prefix: String,
}

/// One raw schedule record as the portal reports it
///
/// Most fields the portal sends are nullable; only the ones the pipeline
/// consumes appear here. Entries without a favorite descriptor are filler
/// (breaks, empty slots) and are dropped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    /// Stable upstream identifier
    pub id: Option<i64>,
    /// Local wall-clock start, `YYYY-MM-DDTHH:MM:SS.mmm`, no offset
    pub starts_at: String,
    /// Local wall-clock end, same layout
    pub ends_at: String,
    /// Present only on real teaching slots
    pub favorite: Option<FavoriteDescriptor>,
    /// Upstream break flag
    pub is_break: bool,
    /// Upstream empty-slot flag
    pub is_empty: bool,
}

/// Client for the school portal's private API
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// Exchange credentials for a session token
    ///
    /// # Errors
    ///
    /// [`PortalError::Auth`] on any non-success status; no retry is
    /// performed, transient upstream failures propagate immediately.
    async fn authenticate(
        &self,
        credentials: &PortalCredentials,
    ) -> Result<SessionToken, PortalError>;

    /// Fetch raw schedule records for a date window
    ///
    /// # Errors
    ///
    /// [`PortalError::Upstream`] carrying the status on non-2xx responses,
    /// [`PortalError::Parse`] when the body is not an array of records.
    async fn fetch_schedule(
        &self,
        token: &SessionToken,
        window: &DateRange,
    ) -> Result<Vec<RawScheduleEntry>, PortalError>;
}
