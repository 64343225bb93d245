//! Client configuration.

use std::{env, fmt, sync::Arc};

use thiserror::Error;

/// Default server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "uoacal_client=info";

/// Errors raised while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Opaque bearer credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(Arc<str>);

impl ApiToken {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Configuration for [`CalendarClient`](crate::CalendarClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Attached to every request as `Authorization: Bearer <token>`.
    pub api_token: ApiToken,
    /// Server base URL without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config for the default base URL.
    pub fn new(api_token: impl Into<Arc<str>>) -> Self {
        Self {
            api_token: ApiToken::new(api_token),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UOACAL_API_TOKEN` - Bearer token (required)
    /// - `UOACAL_URL` - Server base URL (default: "http://localhost:3000")
    pub fn from_env() -> Result<Self, ConfigError> {
        let token =
            env::var("UOACAL_API_TOKEN").map_err(|_| ConfigError::MissingVar("UOACAL_API_TOKEN"))?;
        let base_url = env::var("UOACAL_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(token).with_base_url(base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::new("abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_token.expose(), "abc");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::new("abc").with_base_url("https://cal.example.com/");
        assert_eq!(config.base_url, "https://cal.example.com");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let config = ClientConfig::new("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("ApiToken(***)"));
    }

    #[test]
    fn test_from_env() {
        env::remove_var("UOACAL_API_TOKEN");
        assert_eq!(
            ClientConfig::from_env().unwrap_err(),
            ConfigError::MissingVar("UOACAL_API_TOKEN")
        );

        env::set_var("UOACAL_API_TOKEN", "env-token");
        env::set_var("UOACAL_URL", "http://127.0.0.1:9999/");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_token.expose(), "env-token");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");

        env::remove_var("UOACAL_API_TOKEN");
        env::remove_var("UOACAL_URL");
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert_eq!(DEFAULT_LOG_FILTER, "uoacal_client=info");
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
