use std::time::Duration;

use kvdesk_common::{DEFAULT_USER_ID, NOTIFICATION_TTL};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

fn default_api_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_notification_ttl_ms() -> u64 {
    NOTIFICATION_TTL.as_millis() as u64
}

fn default_true() -> bool {
    true
}

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base address of the backend, without a trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Active identifier at startup
    #[serde(default = "default_user_id")]
    pub default_user_id: String,
    /// How long a notification stays up
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
    /// Fetch the genre list as soon as the console opens
    #[serde(default = "default_true")]
    pub load_genres_on_start: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_user_id: default_user_id(),
            notification_ttl_ms: default_notification_ttl_ms(),
            load_genres_on_start: true,
        }
    }
}

fn parse_api_base_url(url: &str) -> Result<String, ConfigError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key: "api_base_url",
            reason: format!("{url:?} is not an http(s) address"),
        });
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn check_notification_ttl_ms(ttl_ms: u64) -> Result<u64, ConfigError> {
    if ttl_ms == 0 {
        return Err(ConfigError::Invalid {
            key: "notification_ttl_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(ttl_ms)
}

fn parse_notification_ttl_ms(ttl: &str) -> Result<u64, ConfigError> {
    let ttl_ms = ttl.trim().parse().map_err(|e| ConfigError::Invalid {
        key: "notification_ttl_ms",
        reason: format!("{ttl:?}: {e}"),
    })?;
    check_notification_ttl_ms(ttl_ms)
}

impl ConsoleConfig {
    /// Configuration baked in at build time.
    ///
    /// The browser has no process environment, so `KVDESK_API_BASE`,
    /// `KVDESK_DEFAULT_USER` and `KVDESK_NOTIFICATION_TTL_MS` are read when
    /// the crate is compiled. A rejected override keeps that key's default
    /// and leaves the other overrides in place.
    pub fn from_build_env() -> Self {
        let (config, rejected) = Self::from_values_lenient(
            option_env!("KVDESK_API_BASE"),
            option_env!("KVDESK_DEFAULT_USER"),
            option_env!("KVDESK_NOTIFICATION_TTL_MS"),
        );
        for e in &rejected {
            warn!("Ignoring build configuration: {}", e);
        }
        info!("Using backend at {}", config.api_base_url);
        config
    }

    /// Start from the defaults and apply whichever overrides are present.
    /// Fails on the first invalid override.
    pub fn from_values(
        api_base_url: Option<&str>,
        default_user_id: Option<&str>,
        notification_ttl_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_base_url {
            config.api_base_url = parse_api_base_url(url)?;
        }
        if let Some(user) = default_user_id {
            config.default_user_id = user.to_string();
        }
        if let Some(ttl) = notification_ttl_ms {
            config.notification_ttl_ms = parse_notification_ttl_ms(ttl)?;
        }
        Ok(config)
    }

    /// Like [`ConsoleConfig::from_values`], but an invalid override only
    /// costs its own key. Returns the rejected overrides alongside.
    pub fn from_values_lenient(
        api_base_url: Option<&str>,
        default_user_id: Option<&str>,
        notification_ttl_ms: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        if let Some(url) = api_base_url {
            match parse_api_base_url(url) {
                Ok(url) => config.api_base_url = url,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(user) = default_user_id {
            config.default_user_id = user.to_string();
        }
        if let Some(ttl) = notification_ttl_ms {
            match parse_notification_ttl_ms(ttl) {
                Ok(ttl_ms) => config.notification_ttl_ms = ttl_ms,
                Err(e) => rejected.push(e),
            }
        }
        (config, rejected)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.api_base_url = parse_api_base_url(&config.api_base_url)?;
        config.notification_ttl_ms = check_notification_ttl_ms(config.notification_ttl_ms)?;
        Ok(config)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend() {
        let config = ConsoleConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.default_user_id, "user:1234");
        assert_eq!(config.notification_ttl(), Duration::from_secs(3));
        assert!(config.load_genres_on_start);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config =
            ConsoleConfig::from_values(Some("https://kv.example.com/"), Some("user:9"), Some("500"))
                .unwrap();
        assert_eq!(config.api_base_url, "https://kv.example.com");
        assert_eq!(config.default_user_id, "user:9");
        assert_eq!(config.notification_ttl_ms, 500);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ConsoleConfig::from_values(Some("localhost:3001"), None, None),
            Err(ConfigError::Invalid {
                key: "api_base_url",
                ..
            })
        ));
        assert!(matches!(
            ConsoleConfig::from_values(None, None, Some("soon")),
            Err(ConfigError::Invalid {
                key: "notification_ttl_ms",
                ..
            })
        ));
        assert!(ConsoleConfig::from_values(None, None, Some("0")).is_err());
    }

    #[test]
    fn test_lenient_overrides_keep_valid_keys() {
        let (config, rejected) = ConsoleConfig::from_values_lenient(
            Some("https://kv.example.com"),
            Some("user:9"),
            Some("soon"),
        );
        assert_eq!(config.api_base_url, "https://kv.example.com");
        assert_eq!(config.default_user_id, "user:9");
        assert_eq!(config.notification_ttl(), NOTIFICATION_TTL);
        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            rejected[0],
            ConfigError::Invalid {
                key: "notification_ttl_ms",
                ..
            }
        ));

        let (config, rejected) =
            ConsoleConfig::from_values_lenient(Some("localhost:3001"), None, Some("250"));
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.notification_ttl_ms, 250);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn test_json_fills_missing_fields() {
        let config = ConsoleConfig::from_json(r#"{"load_genres_on_start": false}"#).unwrap();
        assert!(!config.load_genres_on_start);
        assert_eq!(config.api_base_url, "http://localhost:3001");

        assert!(matches!(
            ConsoleConfig::from_json("{"),
            Err(ConfigError::Serialization(_))
        ));
    }
}
