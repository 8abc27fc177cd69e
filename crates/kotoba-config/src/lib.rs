use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::speech::SpeechConfig;
use self::store::StoreConfig;

pub mod lookup;
pub mod speech;
pub mod store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub store: StoreConfig,
    pub speech: SpeechConfig,

    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        let log_json = env::var("KOTOBA_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            lookup: LookupConfig::new(),
            store: StoreConfig::new(),
            speech: SpeechConfig::new(),

            log_json,
        }
    }
}
