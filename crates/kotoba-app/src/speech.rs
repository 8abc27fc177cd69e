use std::process::Stdio;

use kotoba_config::speech::SpeechConfig;
use tokio::process::Command;

/// Best-effort spoken playback
pub trait Speaker: Send + Sync {
    /// Start speaking `text`; never reports back
    fn speak(&self, text: &str, language: &str);
}

/// Runs an external synthesizer such as `espeak-ng` or `say`
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// Argument list with `{text}` and `{lang}` filled in
    pub fn format_args(&self, text: &str, language: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{text}", text).replace("{lang}", language))
            .collect()
    }

    fn command(&self, text: &str, language: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.format_args(text, language))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    /// Speak and wait for the synthesizer to exit
    pub async fn speak_blocking(&self, text: &str, language: &str) -> anyhow::Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let status = self.command(text, language).status().await?;
        if !status.success() {
            anyhow::bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str, language: &str) {
        if text.trim().is_empty() {
            return;
        }

        // Dropped child keeps running; tokio reaps it in the background
        match self.command(text, language).spawn() {
            Ok(_child) => tracing::debug!("Speaking '{}' ({})", text, language),
            Err(e) => tracing::warn!("Failed to start {}: {}", self.program, e),
        }
    }
}

/// Used when speech is disabled
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, text: &str, _language: &str) {
        tracing::debug!("Speech disabled, not speaking '{}'", text);
    }
}

pub fn speaker_from_config(config: &SpeechConfig) -> Box<dyn Speaker> {
    if config.enabled {
        Box::new(CommandSpeaker::from_config(config))
    } else {
        Box::new(SilentSpeaker)
    }
}
