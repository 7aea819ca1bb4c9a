//! Connection settings, with defaults and environment overrides.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.ukfast.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`Connection`](crate::Connection).
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,
    /// API key sent in the `Authorization` header, if any.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("hosting-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ConnectionConfig {
    /// Reads `HOSTING_API_URL`, `HOSTING_API_KEY` and
    /// `HOSTING_API_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_string("HOSTING_API_URL").unwrap_or(defaults.base_url),
            api_key: env_string("HOSTING_API_KEY"),
            timeout: Duration::from_secs(env_u64(
                "HOSTING_API_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )),
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
