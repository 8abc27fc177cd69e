use std::io::Write;

use kanal::AsyncReceiver;
use kotoba_core::VocabularyEntry;
use kotoba_lookup::RemoteWord;

use crate::cards;

pub const PROMPT: &str = "kotoba> ";

/// Rendering work sent from the event loop to the terminal
#[derive(Debug, Clone)]
pub enum UiUpdate {
    Entries {
        title: String,
        entries: Vec<VocabularyEntry>,
    },
    Scenes(Vec<(String, usize)>),
    Loading(String),
    /// Already ranked, best match first, with the not-found or failure
    /// message drawn under them
    RemoteResults {
        words: Vec<RemoteWord>,
        message: Option<String>,
    },
    Message(String),
    Closed,
}

/// Draw one update
pub fn render(update: &UiUpdate) -> String {
    match update {
        UiUpdate::Entries { title, entries } => {
            let mut out = format!("{title} ({})", entries.len());
            match entries.as_slice() {
                [single] => {
                    out.push('\n');
                    out.push_str(&cards::entry_card(single));
                }
                many => {
                    for entry in many {
                        out.push_str("\n  ");
                        out.push_str(&cards::entry_line(entry));
                    }
                }
            }
            out
        }
        UiUpdate::Scenes(scenes) => {
            let mut out = format!("Scenes ({})", scenes.len());
            for (scene, count) in scenes {
                out.push_str(&format!("\n  {scene} ({count})"));
            }
            out
        }
        UiUpdate::Loading(keyword) => format!("Looking up '{keyword}'..."),
        UiUpdate::RemoteResults { words, message } => {
            let ranked: Vec<&RemoteWord> = words.iter().collect();
            let mut out = cards::remote_results(&ranked);
            if let Some(message) = message {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(message);
            }
            out
        }
        UiUpdate::Message(message) => message.clone(),
        UiUpdate::Closed => String::new(),
    }
}

/// Print updates until the event loop closes
pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<UiUpdate>,
    mut out: W,
    interactive: bool,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    if interactive {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    while let Ok(update) = app_to_ui_rx.recv().await {
        if matches!(update, UiUpdate::Closed) {
            break;
        }

        let text = render(&update);
        if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
        // Loading is followed by results, keep the prompt for after them
        if interactive && !matches!(update, UiUpdate::Loading(_)) {
            write!(out, "{PROMPT}")?;
        }
        out.flush()?;
    }

    tracing::debug!("UI loop finished");
    Ok(())
}
