use std::sync::Arc;
use std::time::Instant;

use kanal::AsyncSender;
use kotoba_lookup::{HttpTransport, JishoClient, LookupError, RemoteWord, Submission};

use crate::events::AppEvent;
use crate::state::AppState;
use crate::ui::UiUpdate;

/// Start a remote lookup if the throttle allows it.
///
/// The request runs on its own task and reports back through
/// `AppEvent::LookupFinished`, so results are applied on the event loop.
pub async fn handle_lookup<T>(
    state: &mut AppState,
    client: &Arc<JishoClient<T>>,
    keyword: &str,
    events_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
) -> anyhow::Result<()>
where
    T: HttpTransport + 'static,
{
    match state.session.begin(keyword, Instant::now()) {
        Submission::Started(keyword) => {
            app_to_ui_tx
                .send(UiUpdate::Loading(keyword.clone()))
                .await?;

            let client = Arc::clone(client);
            let tx = events_tx.clone();
            tokio::spawn(async move {
                let outcome = client.search(&keyword).await;
                if let Err(e) = tx.send(AppEvent::LookupFinished(outcome)).await {
                    tracing::error!("Failed to deliver lookup result: {}", e);
                }
            });
        }
        Submission::Busy => {}
        Submission::Throttled => {
            if let Some(message) = state.session.error_message() {
                app_to_ui_tx
                    .send(UiUpdate::Message(message.to_string()))
                    .await?;
            }
        }
        Submission::Cleared => {
            app_to_ui_tx
                .send(UiUpdate::RemoteResults {
                    words: vec![],
                    message: None,
                })
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_lookup_finished(
    state: &mut AppState,
    outcome: Result<Vec<RemoteWord>, LookupError>,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
) -> anyhow::Result<()> {
    state.session.finish(outcome);
    tracing::debug!(
        "Lookup '{}' finished with {} results",
        state.session.keyword(),
        state.session.results().len()
    );

    app_to_ui_tx
        .send(UiUpdate::RemoteResults {
            words: state.session.ranked().into_iter().cloned().collect(),
            message: state.session.error_message().map(str::to_string),
        })
        .await?;

    Ok(())
}
