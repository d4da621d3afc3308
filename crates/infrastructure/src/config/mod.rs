//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `portal` (re-exported from `integration_portal`): upstream portal
//!   endpoint and HTTP client settings
//! - `feed`: calendar feed settings (name, window, separator, key path)
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `PLANCAST_`-prefixed environment variables with `__` between
//! nesting levels (`PLANCAST_FEED__START_TIMESTAMP`).

mod feed;
mod server;

use serde::{Deserialize, Serialize};

pub use feed::FeedConfig;
pub use integration_portal::PortalConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream portal configuration
    #[serde(default)]
    pub portal: PortalConfig,

    /// Calendar feed configuration
    #[serde(default)]
    pub feed: FeedConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` when a source is present but
    /// malformed (including an invalid `feed.timezone`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., PLANCAST_SERVER__PORT)
            .add_source(environment());

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Environment override source.
///
/// The nesting separator is a double underscore so snake_case keys stay
/// addressable: `PLANCAST_FEED__START_TIMESTAMP` lands on
/// `feed.start_timestamp`, where a single underscore would split it into
/// the unknown `feed.start.timestamp` and drop the value.
fn environment() -> config::Environment {
    config::Environment::with_prefix("PLANCAST")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.feed.timezone.name(), "Europe/Paris");
        assert!(!config.portal.base_url.is_empty());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"port":9000}}"#).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.feed.separator, ":::");
    }

    #[test]
    fn invalid_timezone_fails_deserialization() {
        let result: Result<AppConfig, _> =
            serde_json::from_str(r#"{"feed":{"timezone":"Nowhere/AtAll"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn env_override_reaches_snake_case_keys() {
        let vars = std::collections::HashMap::from([
            (
                "PLANCAST_FEED__START_TIMESTAMP".to_string(),
                "1740744000000".to_string(),
            ),
            (
                "PLANCAST_FEED__PRIVATE_KEY_PATH".to_string(),
                "/etc/plancast/key.pem".to_string(),
            ),
            ("PLANCAST_SERVER__PORT".to_string(), "9100".to_string()),
        ]);
        let config: AppConfig = config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.feed.start_timestamp, "1740744000000");
        assert_eq!(config.feed.private_key_path, "/etc/plancast/key.pem");
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn invalid_timezone_from_environment_fails_load() {
        let vars = std::collections::HashMap::from([(
            "PLANCAST_FEED__TIMEZONE".to_string(),
            "Nowhere/AtAll".to_string(),
        )]);
        let result = config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server.port, config.server.port);
        assert_eq!(back.feed.calendar_name, config.feed.calendar_name);
    }
}
