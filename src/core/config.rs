//! Environment-driven client configuration.

use std::path::PathBuf;
use url::Url;

use crate::endpoints::STATS_API_BASE_URL;
use crate::error::{Result, StatsError};

pub const BASE_URL_ENV_VAR: &str = "MLB_STATSAPI_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "MLB_STATSAPI_TIMEOUT_SECS";
pub const USER_AGENT_ENV_VAR: &str = "MLB_STATSAPI_USER_AGENT";
pub const ENDPOINTS_ENV_VAR: &str = "MLB_STATSAPI_ENDPOINTS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("mlb-statsapi/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix joined onto every endpoint template.
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Endpoint table to load instead of the built-in one.
    pub endpoints_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: STATS_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoints_file: None,
        }
    }
}

impl Config {
    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = std::env::var(BASE_URL_ENV_VAR).unwrap_or(defaults.base_url);

        let timeout_secs = match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => raw.trim().parse().map_err(|_| StatsError::Config {
                message: format!("{} must be a whole number of seconds, got `{}`", TIMEOUT_ENV_VAR, raw),
            })?,
            Err(_) => defaults.timeout_secs,
        };

        let user_agent = std::env::var(USER_AGENT_ENV_VAR).unwrap_or(defaults.user_agent);
        let endpoints_file = std::env::var_os(ENDPOINTS_ENV_VAR).map(PathBuf::from);

        Ok(Self {
            base_url,
            timeout_secs,
            user_agent,
            endpoints_file,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join the base URL and a resolved endpoint path with exactly one `/`.
    ///
    /// A path that is already an absolute URL is returned unchanged.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if Url::parse(path).is_ok() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
