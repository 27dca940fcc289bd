use crate::constants::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PASSWORD_ENV, TIMEOUT_ENV,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the router
pub struct Credentials {
    /// Router admin password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the router API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for every request, login included
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the Bbox client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads `BBOX_PASSWORD`, `BBOX_BASE_URL`
    /// and `BBOX_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let password = get_env_or_default(PASSWORD_ENV, String::new());
        if password.is_empty() {
            error!("{} not found in environment variables or .env file", PASSWORD_ENV);
        }

        Config {
            credentials: Credentials { password },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    BASE_URL_ENV,
                    DEFAULT_BASE_URL.to_string(),
                )),
                timeout: get_env_or_default(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with default API settings and the given password
    pub fn with_password(password: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                password: password.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.rest_api.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Overrides the request timeout (seconds)
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Full URL of an API path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Value sent in the `Origin` header: the base URL without trailing slash
    #[must_use]
    pub fn origin(&self) -> String {
        self.rest_api.base_url.trim_end_matches('/').to_string()
    }

    /// Value sent in the `Referer` header of endpoint requests
    #[must_use]
    pub fn referer(&self) -> String {
        format!("{}/", self.origin())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
