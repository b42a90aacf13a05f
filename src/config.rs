//! Command-line and environment configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use clap::Parser;

use crate::error::ClientError;

pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:9001/";
pub const DEFAULT_PLAYER_NAME: &str = "bob";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "ping", about = "Terminal client for the Ping grid game")]
pub struct Cli {
    /// Game server address. `http(s)://` is accepted and rewritten to `ws(s)://`.
    #[arg(long, env = "PING_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Name announced in the `join` message.
    #[arg(long, env = "PING_PLAYER_NAME", default_value = DEFAULT_PLAYER_NAME)]
    pub name: String,

    #[arg(long, env = "PING_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,
}

/// Validated client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
    pub name: String,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidServerUrl`] when the URL has no
    /// websocket or http scheme, or no host.
    pub fn from_cli(cli: Cli) -> Result<Self, ClientError> {
        let server_url = ws_url(&cli.server_url)?;
        let name = match cli.name.trim() {
            "" => DEFAULT_PLAYER_NAME.to_owned(),
            name => name.to_owned(),
        };
        Ok(Self {
            server_url,
            name,
            connect_timeout: Duration::from_secs(cli.connect_timeout_secs.max(1)),
        })
    }
}

/// Normalize a server address to a websocket URL.
///
/// # Errors
///
/// Returns [`ClientError::InvalidServerUrl`] for other schemes or a missing host.
pub fn ws_url(raw: &str) -> Result<String, ClientError> {
    let raw = raw.trim();
    let (scheme, rest) = if let Some(rest) = raw.strip_prefix("ws://") {
        ("ws", rest)
    } else if let Some(rest) = raw.strip_prefix("wss://") {
        ("wss", rest)
    } else if let Some(rest) = raw.strip_prefix("http://") {
        ("ws", rest)
    } else if let Some(rest) = raw.strip_prefix("https://") {
        ("wss", rest)
    } else {
        return Err(ClientError::InvalidServerUrl(raw.to_owned()));
    };

    if rest.is_empty() || rest.starts_with('/') {
        return Err(ClientError::InvalidServerUrl(raw.to_owned()));
    }
    Ok(format!("{scheme}://{rest}"))
}
