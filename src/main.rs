use std::io::IsTerminal;

use clap::Parser;
use ping::config::{Cli, ClientConfig};
use ping::error::ClientError;
use ping::session::GameSession;
use ping::terminal::TerminalRenderer;
use ping::transport;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // Frames go to stdout; logs stay on stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ClientConfig::from_cli(Cli::parse())?;
    tracing::info!(url = %config.server_url, name = %config.name, "ping client starting");

    let stream = transport::connect(&config).await.inspect_err(|error| {
        tracing::error!(%error, "ws: connect failed");
    })?;

    let mut session = GameSession::new(config.name);
    let mut lines = transport::spawn_console();
    let stdout = std::io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.is_terminal());
    let mut out = stdout.lock();

    let result = transport::run_session(stream, &mut session, &mut lines, &mut renderer, &mut out).await;
    if let Err(error) = &result {
        tracing::error!(%error, "session ended");
    }
    result
}
