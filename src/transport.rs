//! WebSocket transport — connects, then drives the session from the socket
//! and the console until the connection ends.
//!
//! LIFECYCLE
//! =========
//! 1. `connect_async` under the configured timeout
//! 2. Session emits `join`; effects are executed in order
//! 3. `select!` loop: text frames → session, console lines → dispatcher
//! 4. Close (answered), stream end, or receive error → session closed; no retry

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::io::{BufRead, Write};

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::console;
use crate::dispatch::dispatch_all;
use crate::error::ClientError;
use crate::session::{Effect, GameSession};
use crate::terminal::TerminalRenderer;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const CONSOLE_QUEUE: usize = 64;

/// Open the game connection.
///
/// # Errors
///
/// [`ClientError::ConnectTimeout`] when the handshake does not finish in
/// time, [`ClientError::WsConnect`] when it fails.
pub async fn connect(config: &ClientConfig) -> Result<WsStream, ClientError> {
    let attempt = connect_async(config.server_url.as_str());
    let (stream, _) = tokio::time::timeout(config.connect_timeout, attempt)
        .await
        .map_err(|_| ClientError::ConnectTimeout(config.server_url.clone()))?
        .map_err(|error| ClientError::WsConnect(Box::new(error)))?;
    info!(url = %config.server_url, "ws: connected");
    Ok(stream)
}

/// Read stdin lines on a dedicated thread.
///
/// A blocking stdin read cannot be cancelled, so it stays off the runtime
/// and never holds up shutdown.
#[must_use]
pub fn spawn_console() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(CONSOLE_QUEUE);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "console: read failed");
                    break;
                }
            }
        }
    });
    rx
}

/// Drive `session` until the connection ends.
///
/// # Errors
///
/// [`ClientError::ConnectionClosed`] when the connection ends before the
/// game does; send, encode, and output failures as they occur.
pub async fn run_session(
    mut stream: WsStream,
    session: &mut GameSession,
    lines: &mut mpsc::Receiver<String>,
    renderer: &mut TerminalRenderer,
    out: &mut impl Write,
) -> Result<(), ClientError> {
    let effects = session.on_connected();
    apply_effects(&mut stream, session, renderer, out, effects).await?;

    let mut console_open = true;
    loop {
        tokio::select! {
            message = stream.next() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        debug!(len = text.len(), "ws: text frame");
                        let effects = session.on_text(text.as_str());
                        apply_effects(&mut stream, session, renderer, out, effects).await?;
                    }
                    Some(Ok(Message::Close(frame))) => {
                        debug!(?frame, "ws: close received");
                        // Flushes the queued close reply.
                        if let Err(error) = stream.close(None).await {
                            debug!(%error, "ws: close handshake incomplete");
                        }
                        break;
                    }
                    None => break,
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        error!(%error, "ws: receive failed");
                        break;
                    }
                }
            }
            line = lines.recv(), if console_open => {
                let Some(line) = line else {
                    debug!("console: input closed");
                    console_open = false;
                    continue;
                };
                let events = match console::parse_command(&line) {
                    Ok(command) => console::events_for(command, session),
                    Err(error) => {
                        warn!(%error, %line, "console: unparseable input");
                        continue;
                    }
                };
                let effects = dispatch_all(session, events);
                apply_effects(&mut stream, session, renderer, out, effects).await?;
            }
        }
    }

    session.on_closed()
}

/// Execute handler effects in order.
async fn apply_effects(
    stream: &mut WsStream,
    session: &GameSession,
    renderer: &mut TerminalRenderer,
    out: &mut impl Write,
    effects: Vec<Effect>,
) -> Result<(), ClientError> {
    for effect in effects {
        match effect {
            Effect::Send(message) => {
                let text = frames::encode_message(&message)?;
                debug!(%text, "ws: send");
                stream
                    .send(Message::Text(text.into()))
                    .await
                    .map_err(|error| ClientError::WsSend(Box::new(error)))?;
            }
            Effect::Redraw => {
                session.render(renderer);
                renderer.present(out)?;
            }
        }
    }
    Ok(())
}
