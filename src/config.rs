//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::{AeroApiError, Result};

/// Default AeroAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://aeroapi.flightaware.com/aeroapi/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AEROAPI_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "AEROAPI_URL";
/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "AEROAPI_TIMEOUT_SECS";

/// Settings used to construct an [`AeroApiClient`](crate::AeroApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// AeroAPI key, sent as `x-apikey`.
    pub api_key: String,
    /// Base URL every path is resolved against.
    pub base_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Configuration for the public AeroAPI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read configuration from the environment.
    ///
    /// `AEROAPI_API_KEY` is required; `AEROAPI_URL` and
    /// `AEROAPI_TIMEOUT_SECS` are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the timeout is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            AeroApiError::ConfigMissing(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var(TIMEOUT_ENV)
            .ok()
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| AeroApiError::InvalidConfig(format!("{TIMEOUT_ENV} must be seconds, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_public_endpoint() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", ClientConfig::new("secret-key"));
        assert!(debug.contains("ClientConfig"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
        assert!(matches!(
            parse_timeout("soon"),
            Err(AeroApiError::InvalidConfig(_))
        ));
    }
}
