use std::env;
use std::time::Duration;

use crate::error::{EnvVarError, Result};

pub const DEFAULT_DOMAIN: &str = "https://statsapi.web.nhl.com";
pub const DEFAULT_API_VERSION: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DOMAIN_ENV_VAR: &str = "NHL_STATS_API_DOMAIN";
pub const API_VERSION_ENV_VAR: &str = "NHL_STATS_API_VERSION";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub domain: String,
    pub api_version: u32,
    pub timeout: Duration,
    /// Turn 4xx/5xx responses into [`crate::Error::ClientError`] and
    /// [`crate::Error::ServerError`] instead of handing them back.
    pub raise_status_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.into(),
            api_version: DEFAULT_API_VERSION,
            timeout: DEFAULT_TIMEOUT,
            raise_status_errors: true,
        }
    }
}

impl Config {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    // can use dotenv
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(domain) = env::var(DOMAIN_ENV_VAR) {
            config.domain = domain;
        }
        if let Ok(version) = env::var(API_VERSION_ENV_VAR) {
            config.api_version = version
                .trim()
                .parse()
                .map_err(|e| EnvVarError::new(API_VERSION_ENV_VAR, &version, e))?;
        }
        Ok(config)
    }

    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_status_errors(mut self, raise: bool) -> Self {
        self.raise_status_errors = raise;
        self
    }

    pub fn base_url(&self) -> String {
        format!(
            "{}/api/v{}",
            self.domain.trim_end_matches('/'),
            self.api_version
        )
    }
}
