use std::env;

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    "kotobanyan.sqlite3".to_string()
}

fn default_csv_path() -> Option<String> {
    Some("scene.csv".to_string())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    /// Bundled vocabulary CSV imported into an empty table on startup
    #[serde(default = "default_csv_path")]
    pub csv_path: Option<String>,
}

impl StoreConfig {
    pub fn new() -> Self {
        let db_path = env::var("KOTOBA_DB_PATH").unwrap_or_else(|_| default_db_path());
        let csv_path = match env::var("KOTOBA_CSV_PATH") {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => default_csv_path(),
        };

        Self { db_path, csv_path }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            csv_path: default_csv_path(),
        }
    }
}
