use std::io::BufRead;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_lookup::{HttpTransport, JishoClient};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::io::spawn_input_reader;
use crate::speech::Speaker;
use crate::state::AppState;
use crate::ui::{UiUpdate, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<UiUpdate>, AsyncReceiver<UiUpdate>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),     // input + lookup completions
            app_to_ui: kanal::bounded_async(256), // rendered output
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<T, R>(
        &self,
        state: AppState,
        client: Arc<JishoClient<T>>,
        speaker: Arc<dyn Speaker>,
        input: R,
        interactive: bool,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        T: HttpTransport + 'static,
        R: BufRead + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            state,
            client,
            speaker,
            self.channels.events.1.clone(),
            self.channels.events.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            std::io::stdout(),
            interactive,
        ));

        // Input reader runs detached on its own thread
        spawn_input_reader(
            input,
            self.channels.events.0.clone(),
            self.cancel_token.child_token(),
        )?;

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
