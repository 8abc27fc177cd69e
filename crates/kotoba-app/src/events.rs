use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_lookup::{HttpTransport, JishoClient, LookupError, RemoteWord};
use tokio_util::sync::CancellationToken;

use crate::speech::Speaker;
use crate::state::AppState;
use crate::ui::UiUpdate;

pub mod local_search;
pub mod lookup;

use local_search::{handle_prefix_search, handle_scene, handle_scenes};
use lookup::{handle_lookup, handle_lookup_finished};

#[derive(Debug)]
pub enum AppEvent {
    PrefixSearch(String),
    ShowScenes,
    ShowScene(String),
    Lookup(String),
    /// Completion of the single in-flight lookup
    LookupFinished(Result<Vec<RemoteWord>, LookupError>),
    Speak {
        text: String,
        language: Option<String>,
    },
    Help,
    Quit,
}

pub const HELP: &str = "text            prefix search in the local vocabulary
:scenes         list scenes
:scene NAME     words of one scene
:lookup WORD    search the online dictionary
:speak TEXT     read text aloud
:quit           exit";

/// Turn one line of shell input into an event
pub fn parse_input(line: &str) -> AppEvent {
    let line = line.trim();

    let Some(command) = line.strip_prefix(':') else {
        return AppEvent::PrefixSearch(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim().to_string()),
        None => (command, String::new()),
    };

    match name {
        "scenes" => AppEvent::ShowScenes,
        "scene" => AppEvent::ShowScene(arg),
        "lookup" | "l" => AppEvent::Lookup(arg),
        "speak" | "s" => AppEvent::Speak {
            text: arg,
            language: None,
        },
        "quit" | "q" | "exit" => AppEvent::Quit,
        _ => AppEvent::Help,
    }
}

/// Shell main loop. Sole owner of the catalog and lookup session.
pub async fn event_loop<T>(
    mut state: AppState,
    client: Arc<JishoClient<T>>,
    speaker: Arc<dyn Speaker>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<UiUpdate>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    T: HttpTransport + 'static,
{
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    // Quit seen while a lookup runs; only its completion is handled from here on
    let mut quitting = false;
    let result = loop {
        let event = tokio::select! {
            event = events_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => break Err(e.into()),
            },
            _ = cancel.cancelled() => break Ok(()),
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if matches!(event, AppEvent::Quit) {
            if !state.session.is_loading() {
                break Ok(());
            }
            tracing::info!("[EVENT_LOOP] Quit requested, waiting for the running lookup");
            quitting = true;
            continue;
        }
        if quitting && !matches!(event, AppEvent::LookupFinished(_)) {
            tracing::debug!("[EVENT_LOOP] Shutting down, dropping event");
            continue;
        }

        if let Err(e) = handle_events(
            &mut state,
            &client,
            speaker.as_ref(),
            &events_tx,
            &app_to_ui_tx,
            event,
        )
        .await
        {
            break Err(e);
        }

        if quitting && !state.session.is_loading() {
            break Ok(());
        }
    };

    // UI loop waits for Closed, send it on every exit path
    cancel.cancel();
    let _ = app_to_ui_tx.send(UiUpdate::Closed).await;
    tracing::info!("[EVENT_LOOP] Stopped");
    result
}

async fn handle_events<T>(
    state: &mut AppState,
    client: &Arc<JishoClient<T>>,
    speaker: &dyn Speaker,
    events_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
    event: AppEvent,
) -> anyhow::Result<()>
where
    T: HttpTransport + 'static,
{
    match event {
        AppEvent::PrefixSearch(query) => {
            handle_prefix_search(state, &query, app_to_ui_tx).await?;
        }
        AppEvent::ShowScenes => {
            handle_scenes(state, app_to_ui_tx).await?;
        }
        AppEvent::ShowScene(scene) => {
            handle_scene(state, &scene, app_to_ui_tx).await?;
        }
        AppEvent::Lookup(keyword) => {
            handle_lookup(state, client, &keyword, events_tx, app_to_ui_tx).await?;
        }
        AppEvent::LookupFinished(outcome) => {
            handle_lookup_finished(state, outcome, app_to_ui_tx).await?;
        }
        AppEvent::Speak { text, language } => {
            let language = language.unwrap_or_else(|| state.config.speech.language.clone());
            speaker.speak(&text, &language);
        }
        AppEvent::Help => {
            app_to_ui_tx.send(UiUpdate::Message(HELP.to_string())).await?;
        }
        AppEvent::Quit => {}
    }

    Ok(())
}
