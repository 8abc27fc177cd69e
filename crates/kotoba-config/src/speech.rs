use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_program() -> String {
    "espeak-ng".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-v".to_string(), "{lang}".to_string(), "{text}".to_string()]
}

fn default_language() -> String {
    "ja".to_string()
}

/// External speech synthesizer invocation.
///
/// `{text}` and `{lang}` inside `args` are replaced per utterance.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let program = env::var("KOTOBA_TTS_PROGRAM").unwrap_or_else(|_| default_program());
        let enabled = env::var("KOTOBA_TTS_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        Self {
            enabled,
            program,
            ..Self::default()
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            args: default_args(),
            language: default_language(),
        }
    }
}
