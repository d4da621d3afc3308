//! Portal HTTP client
//!
//! Token login plus planning fetch against the portal's private mobile
//! API. One request per operation, no retries: the feed is best-effort
//! and synchronous, so transient upstream failures surface immediately.

use application::ports::{PortalClient, PortalError, RawScheduleEntry, SessionToken};
use async_trait::async_trait;
use domain::{DateRange, PortalCredentials};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::models::{PlanningEntry, TokenResponse};

/// Portal endpoint and HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Portal API base URL; `/login` and `/schedule` are appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent sent on every portal request
    ///
    /// The portal only serves its mobile app, so we present as one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    ///
    /// A hung upstream must not pin a request handler forever.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://mycpe.cpe.fr/mobile".to_string()
}

fn default_user_agent() -> String {
    "Dalvik/2.1.0 (Linux; U; Android 15; sdk_gphone64_x86_64 Build/AE3A.240806.005)".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

/// reqwest-backed [`PortalClient`]
///
/// gzip responses are decompressed transparently by the client; the portal
/// gzips planning payloads when asked.
#[derive(Debug, Clone)]
pub struct HttpPortalClient {
    client: Client,
    config: PortalConfig,
}

impl HttpPortalClient {
    /// Create a new portal client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Connection`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| PortalError::Connection(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Connection`] if the HTTP client cannot be
    /// initialized.
    pub fn with_defaults() -> Result<Self, PortalError> {
        Self::new(PortalConfig::default())
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.config.base_url)
    }

    fn schedule_url(&self, window: &DateRange) -> String {
        format!(
            "{}/schedule?date_debut={}&date_fin={}",
            self.config.base_url,
            window.start_param(),
            window.end_param()
        )
    }
}

#[async_trait]
impl PortalClient for HttpPortalClient {
    #[instrument(skip_all, fields(identity = %credentials.identity()))]
    async fn authenticate(
        &self,
        credentials: &PortalCredentials,
    ) -> Result<SessionToken, PortalError> {
        let body = json!({
            "login": credentials.identity(),
            "password": credentials.secret().expose_secret(),
        });

        let response = self
            .client
            .post(self.login_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| PortalError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "portal rejected login");
            return Err(PortalError::Auth);
        }

        // An unparsable login body counts as an auth failure too: the
        // portal answers 200 with an error page when the account is locked.
        let token: TokenResponse = response.json().await.map_err(|e| {
            debug!(error = %e, "login response did not parse");
            PortalError::Auth
        })?;

        Ok(SessionToken::new(token.token))
    }

    #[instrument(skip_all, fields(start = %window.start_param(), end = %window.end_param()))]
    async fn fetch_schedule(
        &self,
        token: &SessionToken,
        window: &DateRange,
    ) -> Result<Vec<RawScheduleEntry>, PortalError> {
        let url = self.schedule_url(window);
        debug!(url = %url, "fetching planning");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| PortalError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Upstream {
                status: status.as_u16(),
            });
        }

        let entries: Vec<PlanningEntry> = response
            .json()
            .await
            .map_err(|e| PortalError::Parse(e.to_string()))?;

        Ok(entries.into_iter().map(RawScheduleEntry::from).collect())
    }
}
