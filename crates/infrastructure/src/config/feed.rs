//! Calendar feed configuration.

use domain::CivilTimezone;
use serde::{Deserialize, Serialize};

/// Calendar feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Calendar display name (NAME / X-WR-CALNAME)
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// Download filename for the Content-Disposition header
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Zone the portal reports wall-clock times in
    #[serde(default)]
    pub timezone: CivilTimezone,

    /// Separator between identity and secret in the decrypted payload.
    /// The identity must never contain it; the secret may.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Feed window start, Unix milliseconds
    #[serde(default)]
    pub start_timestamp: String,

    /// Feed window end, Unix milliseconds
    #[serde(default)]
    pub end_timestamp: String,

    /// Path to the PEM-encoded RSA private key
    #[serde(default = "default_key_path")]
    pub private_key_path: String,
}

fn default_calendar_name() -> String {
    "Campus Calendar".to_string()
}

fn default_filename() -> String {
    "campus-calendar.ics".to_string()
}

fn default_separator() -> String {
    ":::".to_string()
}

fn default_key_path() -> String {
    "secret/private.pem".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            calendar_name: default_calendar_name(),
            filename: default_filename(),
            timezone: CivilTimezone::default(),
            separator: default_separator(),
            start_timestamp: String::new(),
            end_timestamp: String::new(),
            private_key_path: default_key_path(),
        }
    }
}
