//! Client configuration loaded from the environment.
//!
//! Recognized options are the service base URL and the request timeout; both
//! have defaults matching a locally running ocean digital-twin backend so the
//! CLI works out of the box against `http://127.0.0.1:3000`.

use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;

/// Default base URL of the ocean digital-twin service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the service base URL.
pub const BASE_URL_VAR: &str = "OCEAN_API_URL";

/// Environment variable overriding the request timeout (milliseconds).
pub const TIMEOUT_MS_VAR: &str = "OCEAN_API_TIMEOUT_MS";

/// Configuration for constructing an [`crate::api::OceanClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request issued by the client.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// Unset variables fall back to the defaults; a set but unparseable
    /// timeout is a hard error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let base_url = match env::var(BASE_URL_VAR) {
            Ok(raw) => trim_trailing_slash(raw),
            Err(env::VarError::NotPresent) => DEFAULT_BASE_URL.to_string(),
            Err(e) => return Err(e.into()),
        };

        let timeout_ms = match env::var(TIMEOUT_MS_VAR) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("invalid {}={:?}: {}", TIMEOUT_MS_VAR, raw, e))
            })?,
            Err(env::VarError::NotPresent) => DEFAULT_TIMEOUT_MS,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn trim_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_unset() {
        env::remove_var(BASE_URL_VAR);
        env::remove_var(TIMEOUT_MS_VAR);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    #[serial]
    fn env_overrides_are_honored() {
        env::set_var(BASE_URL_VAR, "http://example.org:8080/");
        env::set_var(TIMEOUT_MS_VAR, "2500");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://example.org:8080");
        assert_eq!(config.timeout, Duration::from_millis(2500));

        env::remove_var(BASE_URL_VAR);
        env::remove_var(TIMEOUT_MS_VAR);
    }

    #[test]
    #[serial]
    fn malformed_timeout_is_rejected() {
        env::set_var(TIMEOUT_MS_VAR, "ten seconds");

        let result = ClientConfig::from_env();
        assert!(matches!(result, Err(crate::error::AppError::Config(_))));

        env::remove_var(TIMEOUT_MS_VAR);
    }

    #[test]
    fn new_trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
