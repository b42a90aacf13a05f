//! Input model: keys, modifier flags, and the events the host forwards to the game.
//!
//! The host (browser glue or terminal console) turns raw device events into
//! [`InputEvent`]s. Keys arrive as DOM keycodes and are narrowed to the few
//! the game cares about; pointer events carry a screen-space position.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Direction, Point};

/// DOM keycodes for the keys the game binds.
pub const KEYCODE_SPACE: u32 = 32;
pub const KEYCODE_LEFT: u32 = 37;
pub const KEYCODE_UP: u32 = 38;
pub const KEYCODE_RIGHT: u32 = 39;
pub const KEYCODE_DOWN: u32 = 40;

/// A keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Space,
    /// Any other key, by keycode.
    Other(u32),
}

impl Key {
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEYCODE_LEFT => Self::ArrowLeft,
            KEYCODE_UP => Self::ArrowUp,
            KEYCODE_RIGHT => Self::ArrowRight,
            KEYCODE_DOWN => Self::ArrowDown,
            KEYCODE_SPACE => Self::Space,
            other => Self::Other(other),
        }
    }

    /// The compass direction an arrow key stands for.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::North),
            Self::ArrowDown => Some(Direction::South),
            Self::ArrowLeft => Some(Direction::West),
            Self::ArrowRight => Some(Direction::East),
            Self::Space | Self::Other(_) => None,
        }
    }

    /// The arrow key for a compass direction.
    #[must_use]
    pub fn arrow(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::ArrowUp,
            Direction::South => Self::ArrowDown,
            Direction::West => Self::ArrowLeft,
            Direction::East => Self::ArrowRight,
        }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held. Turns a move into a shot.
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// A device event routed to the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: Key, modifiers: Modifiers },
    KeyUp { key: Key },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
}
