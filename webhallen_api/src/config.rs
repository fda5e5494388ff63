//! Client configuration: base URL and request timeout.

use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.webhallen.com/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the base URL in [`Config::from_env`].
pub const BASE_URL_ENV: &str = "WEBHALLEN_BASE_URL";

/// Environment variable overriding the timeout (whole seconds) in [`Config::from_env`].
pub const TIMEOUT_ENV: &str = "WEBHALLEN_TIMEOUT_SECS";

/// Settings a [`Client`](crate::Client) is built from. Immutable once the client owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Root URL that request paths are appended to.
    pub base_url: String,
    /// Per-request timeout, covering connect and body read.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Starts from the defaults and applies `WEBHALLEN_BASE_URL` and
    /// `WEBHALLEN_TIMEOUT_SECS` when set. Unparseable or zero timeouts are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(0) => tracing::warn!("Ignoring {}=0: timeout must be positive", TIMEOUT_ENV),
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(e) => tracing::warn!("Ignoring invalid {}={:?}: {}", TIMEOUT_ENV, raw, e),
            }
        }
        config
    }
}
