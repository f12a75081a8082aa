//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAWMART_API_URL` - Base URL of the PawMart REST backend
//!
//! ## Optional
//! - `PAWMART_TOKEN_PATH` - Where the bearer token is persisted
//!   (default: `$HOME/.pawmart/token`)
//! - `PAWMART_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// PawMart client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub api_url: Url,
    /// Path of the single-slot bearer token file.
    pub token_path: PathBuf,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PAWMART_API_URL` is missing or not a valid
    /// URL, or if an optional variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_base_url(&get_required_env("PAWMART_API_URL")?)?;

        let token_path = get_optional_env("PAWMART_TOKEN_PATH")
            .map_or_else(default_token_path, PathBuf::from);

        let http_timeout = match get_optional_env("PAWMART_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "PAWMART_HTTP_TIMEOUT_SECS".to_owned(),
                        format!("expected a number of seconds, got {raw:?}"),
                    )
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            token_path,
            http_timeout,
        })
    }
}

/// Parse and normalize the backend base URL.
///
/// A trailing slash is stripped so endpoint paths can be joined with a
/// single `/` everywhere.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| {
        ConfigError::InvalidEnvVar("PAWMART_API_URL".to_owned(), e.to_string())
    })
}

/// Default token location: `$HOME/.pawmart/token`, falling back to a
/// relative path when `HOME` is unset (e.g., some containers).
fn default_token_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".pawmart/token"),
        |home| PathBuf::from(home).join(".pawmart").join("token"),
    )
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
