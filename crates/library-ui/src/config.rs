//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::i18n::Locale;
use crate::notify::DEFAULT_NOTIFICATION_TIMEOUT;
use crate::util::DEFAULT_LOADER_MIN;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL.
    pub base_url: String,
    /// UI language.
    pub locale: Locale,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Minimum time the loading indicator stays visible.
    pub loader_min: Duration,
    /// Auto-dismiss delay for notifications.
    pub notification_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: Locale::default(),
            log_level: "info".to_string(),
            loader_min: DEFAULT_LOADER_MIN,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `LIBRARY_URL`: Backend base URL (default: http://localhost:8080)
    /// - `LIBRARY_LOCALE`: `en` or `ru` (default: "en")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOADER_MIN_MS`: Minimum loader duration (default: 1000)
    /// - `NOTIFICATION_TIMEOUT_MS`: Notification lifetime (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = lookup("LIBRARY_URL").unwrap_or(defaults.base_url);

        let locale = match lookup("LIBRARY_LOCALE") {
            Some(value) => value.parse().map_err(|e: crate::i18n::UnknownLocale| {
                ConfigError::InvalidValue {
                    name: "LIBRARY_LOCALE".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.locale,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let loader_min = millis(&lookup, "LOADER_MIN_MS")?.unwrap_or(defaults.loader_min);
        let notification_timeout = millis(&lookup, "NOTIFICATION_TIMEOUT_MS")?
            .unwrap_or(defaults.notification_timeout);

        Ok(Self {
            base_url,
            locale,
            log_level,
            loader_min,
            notification_timeout,
        })
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<Duration>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
