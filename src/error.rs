//! Client error type.
//!
//! Everything here is fatal to the session. Recoverable conditions (unknown
//! message types, illegal local input) are absorbed where they are detected
//! and never become a `ClientError`.

use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tungstenite::Error>),
    #[error("websocket send failed: {0}")]
    WsSend(Box<tungstenite::Error>),
    #[error("timed out connecting to {0}")]
    ConnectTimeout(String),
    #[error("connection closed before the game ended")]
    ConnectionClosed,
    #[error("console read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("message codec failed: {0}")]
    Codec(#[from] frames::CodecError),
}
