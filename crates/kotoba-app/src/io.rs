use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::AsyncSender;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, parse_input};

/// Read shell input on a plain thread and forward each line as an event.
///
/// Blocking stdin reads live outside the runtime so they never hold up
/// shutdown; the thread exits on EOF, cancellation or a closed channel.
pub fn spawn_input_reader<R>(
    input: R,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    let handle = Handle::current();

    std::thread::Builder::new()
        .name("kotoba-input".to_string())
        .spawn(move || {
            for line in input.lines() {
                if cancel.is_cancelled() {
                    break;
                }

                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                if let Err(e) = handle.block_on(event_tx.send(parse_input(&line))) {
                    tracing::debug!("Event loop gone, input reader stopping: {}", e);
                    return;
                }
            }

            tracing::info!("Input closed");
            let _ = handle.block_on(event_tx.send(AppEvent::Quit));
        })
}
