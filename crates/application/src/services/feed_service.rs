//! Calendar feed service
//!
//! Orchestrates the whole pipeline: unseal → authenticate → fetch →
//! normalize → render. Strictly sequential and fail-fast; any stage error
//! aborts the request, nothing is retried and nothing is cached.

use std::sync::Arc;

use domain::{CivilTimezone, DateRange};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{CredentialUnsealer, PortalClient},
    services::{ics::render_ics, normalizer::normalize},
};

/// Per-deployment feed settings
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Calendar display name (NAME / X-WR-CALNAME)
    pub calendar_name: String,
    /// Zone the portal reports wall-clock times in
    pub timezone: CivilTimezone,
    /// Window start, Unix milliseconds
    pub window_start_ms: String,
    /// Window end, Unix milliseconds
    pub window_end_ms: String,
}

/// The credential-gated calendar synchronization pipeline
pub struct CalendarFeedService {
    unsealer: Arc<dyn CredentialUnsealer>,
    portal: Arc<dyn PortalClient>,
    settings: FeedSettings,
}

impl std::fmt::Debug for CalendarFeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarFeedService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CalendarFeedService {
    /// Wire the pipeline against its ports
    #[must_use]
    pub fn new(
        unsealer: Arc<dyn CredentialUnsealer>,
        portal: Arc<dyn PortalClient>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            unsealer,
            portal,
            settings,
        }
    }

    /// Run the full pipeline and return the rendered ICS document.
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the request; see [`ApplicationError`].
    /// A failed authentication never issues a schedule fetch.
    #[instrument(skip_all)]
    pub async fn generate_feed(
        &self,
        encrypted_credentials: &str,
    ) -> Result<String, ApplicationError> {
        let window = DateRange::from_unix_millis(
            &self.settings.window_start_ms,
            &self.settings.window_end_ms,
            self.settings.timezone,
        )?;

        let credentials = self.unsealer.unseal(encrypted_credentials)?;
        info!(identity = %credentials.identity(), "credentials unsealed");

        let token = self.portal.authenticate(&credentials).await?;
        let entries = self.portal.fetch_schedule(&token, &window).await?;

        let events = normalize(&entries, self.settings.timezone);
        info!(
            entries = entries.len(),
            events = events.len(),
            "schedule normalized"
        );

        Ok(render_ics(&events, &self.settings.calendar_name))
    }

    /// Unseal + authenticate only, for the login-check endpoint.
    ///
    /// # Errors
    ///
    /// Same unsealing and authentication failures as [`Self::generate_feed`].
    #[instrument(skip_all)]
    pub async fn validate_credentials(
        &self,
        encrypted_credentials: &str,
    ) -> Result<(), ApplicationError> {
        let credentials = self.unsealer.unseal(encrypted_credentials)?;
        self.portal.authenticate(&credentials).await?;
        info!(identity = %credentials.identity(), "credentials validated");
        Ok(())
    }
}
