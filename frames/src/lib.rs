//! Wire messages and JSON codec for the game connection.
//!
//! This crate owns the representation of every message exchanged with the
//! game server. Outbound intents are [`ClientMessage`]s, inbound events are
//! [`ServerMessage`]s. Both are JSON objects whose `type` field selects the
//! variant.
//!
//! Decoding distinguishes a message of unknown `type` from a malformed one so
//! the session can drop the former quietly and still report the latter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message kinds the server is known to send.
const KNOWN_SERVER_TYPES: [&str; 4] = ["joined", "start", "update", "end"];

/// Error returned by [`decode_message`] and [`encode_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not valid JSON, or a known message has a bad payload.
    #[error("invalid JSON message: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The message has no string `type` field.
    #[error("message has no `type` field")]
    MissingType,
    /// The `type` field names a message kind this client does not understand.
    #[error("unknown message type: {0}")]
    UnknownType(String),
}

/// Player color as used on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other player's color.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Compass direction as used on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

/// A grid coordinate pair `[x, y]`.
pub type Coord = [i32; 2];

/// One polyomino template: ordered `[dx, dy]` offsets.
pub type ShapeTemplate = Vec<Coord>;

/// Outbound intents sent by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// First message on a fresh connection.
    Join { name: String },
    /// Move the local player one cell.
    Move { direction: Direction },
    /// Fire in a direction.
    Shoot { direction: Direction },
    /// Probe for the opponent.
    Ping,
    /// Drop a shape with its anchor at `origin`.
    Place { shape_index: usize, origin: Coord },
}

/// Visible board state pushed with every `start`/`update`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// White player's cell, absent or `null` when not visible.
    #[serde(default)]
    pub white_player: Option<Coord>,
    /// Black player's cell, absent or `null` when not visible.
    #[serde(default)]
    pub black_player: Option<Coord>,
    #[serde(default)]
    pub white_block: Vec<Coord>,
    #[serde(default)]
    pub black_block: Vec<Coord>,
}

/// Payload of `joined`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedMessage {
    pub board_width: usize,
    pub moves_per_turn: u32,
    /// Some servers announce the shape set here rather than on `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeTemplate>>,
}

/// Payload shared by `start` and `update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    /// Whose turn is active.
    pub turn: Color,
    /// Moves left in the current turn.
    pub moves_remaining: u32,
    pub board: BoardSnapshot,
    /// Present only on the first delivery to each player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_color: Option<Color>,
    /// Present only alongside `your_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeTemplate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_number: Option<u32>,
    /// Opponent's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    /// Whether the last ping saw the opponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping_saw_opponent: Option<bool>,
}

/// Payload of `end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndMessage {
    /// `"win"` for the receiving player, anything else is a loss.
    pub result: String,
    pub reason: String,
}

impl EndMessage {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result == "win"
    }
}

/// Inbound events pushed by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Joined(JoinedMessage),
    Start(StateMessage),
    Update(StateMessage),
    End(EndMessage),
}

impl ServerMessage {
    /// The wire `type` of this message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Joined(_) => "joined",
            Self::Start(_) => "start",
            Self::Update(_) => "update",
            Self::End(_) => "end",
        }
    }
}

/// Encode an outbound message as a JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::InvalidJson`] if serialization fails.
pub fn encode_message(message: &ClientMessage) -> Result<String, CodecError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode an inbound JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::InvalidJson`] for malformed JSON or a bad payload,
/// [`CodecError::MissingType`] when `type` is absent, and
/// [`CodecError::UnknownType`] for message kinds outside the protocol.
pub fn decode_message(text: &str) -> Result<ServerMessage, CodecError> {
    let value = serde_json::from_str::<Value>(text)?;
    let Some(kind) = value.get("type").and_then(Value::as_str) else {
        return Err(CodecError::MissingType);
    };
    if !KNOWN_SERVER_TYPES.contains(&kind) {
        return Err(CodecError::UnknownType(kind.to_owned()));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
