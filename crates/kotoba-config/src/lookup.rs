use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://jisho.org".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cooldown_ms() -> u64 {
    1000
}

/// Remote dictionary lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Scheme and host of the dictionary API, without trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Minimum gap between request starts
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let base_url = env::var("KOTOBA_API_URL").unwrap_or_else(|_| default_base_url());

        let timeout_secs = env::var("KOTOBA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        let cooldown_ms = env::var("KOTOBA_COOLDOWN_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cooldown_ms);

        Self {
            base_url,
            timeout_secs,
            cooldown_ms,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Full URL of the word search endpoint
    pub fn search_url(&self) -> String {
        format!(
            "{}/api/v1/search/words",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}
