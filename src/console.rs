//! Console input — one command per stdin line, turned into input events.
//!
//! | Command | Events |
//! |---------|--------|
//! | `n` `s` `e` `w` | arrow key press and release |
//! | `shoot <dir>` | shift+arrow press and release |
//! | `ping` | space press and release |
//! | `down <x> <y>` / `drag <x> <y>` / `up <x> <y>` | pointer event at a screen point |
//! | `place <shape> <cx> <cy>` | drag a tray shape onto board cell `(cx, cy)` |

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use canvas::input::{InputEvent, Key, Modifiers};
use canvas::{Cell, Direction, Point};

use crate::session::GameSession;

/// Pointer offset into a tile, so hit-tests land inside it.
const GRAB_INSET: Point = Point { x: 1.0, y: 1.0 };

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid direction `{0}`; expected n, s, e or w")]
    InvalidDirection(String),
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Events that need no session context.
    Events(Vec<InputEvent>),
    /// Drag `shape_index` from the tray onto `cell`.
    Place { shape_index: usize, cell: Cell },
}

/// Parse one console line. Blank lines parse to no events.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Events(Vec::new()));
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "n" | "s" | "e" | "w" => Command::Events(press(Key::arrow(direction(verb)?), Modifiers::default())),
        "shoot" => {
            let dir = words.next().ok_or(ParseError::MissingArgument("direction"))?;
            Command::Events(press(Key::arrow(direction(dir)?), Modifiers::shift()))
        }
        "ping" => Command::Events(press(Key::Space, Modifiers::default())),
        "down" => Command::Events(vec![InputEvent::PointerDown(point(&mut words)?)]),
        "drag" => Command::Events(vec![InputEvent::PointerMove(point(&mut words)?)]),
        "up" => Command::Events(vec![InputEvent::PointerUp(point(&mut words)?)]),
        "place" => {
            let shape = words.next().ok_or(ParseError::MissingArgument("shape"))?;
            let shape_index = shape.parse::<usize>().map_err(|_| ParseError::InvalidNumber(shape.to_owned()))?;
            let x = integer(words.next(), "cx")?;
            let y = integer(words.next(), "cy")?;
            Command::Place { shape_index, cell: Cell::new(x, y) }
        }
        other => return Err(ParseError::UnknownCommand(other.to_owned())),
    };

    let rest = words.collect::<Vec<_>>();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.join(" ")));
    }
    Ok(command)
}

/// Resolve a command against the current screen layout.
///
/// `place` becomes pointer-down on the shape's tray anchor, then move and
/// release over the target cell. Nothing is produced while the tray or the
/// board does not exist yet, or when the shape index is unknown.
#[must_use]
pub fn events_for(command: Command, session: &GameSession) -> Vec<InputEvent> {
    match command {
        Command::Events(events) => events,
        Command::Place { shape_index, cell } => {
            let (Some(shapes), Some(board)) = (session.shapes(), session.board()) else {
                return Vec::new();
            };
            let Some(anchor) = shapes.anchor(shape_index) else {
                return Vec::new();
            };
            let target = board.board_to_world(cell) + GRAB_INSET;
            vec![
                InputEvent::PointerDown(anchor + GRAB_INSET),
                InputEvent::PointerMove(target),
                InputEvent::PointerUp(target),
            ]
        }
    }
}

fn press(key: Key, modifiers: Modifiers) -> Vec<InputEvent> {
    vec![InputEvent::KeyDown { key, modifiers }, InputEvent::KeyUp { key }]
}

fn direction(word: &str) -> Result<Direction, ParseError> {
    match word.to_ascii_lowercase().as_str() {
        "n" | "north" => Ok(Direction::North),
        "s" | "south" => Ok(Direction::South),
        "e" | "east" => Ok(Direction::East),
        "w" | "west" => Ok(Direction::West),
        _ => Err(ParseError::InvalidDirection(word.to_owned())),
    }
}

fn integer(word: Option<&str>, name: &'static str) -> Result<i32, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument(name))?;
    word.parse::<i32>().map_err(|_| ParseError::InvalidNumber(word.to_owned()))
}

fn point<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Point, ParseError> {
    let mut coordinate = |name: &'static str| {
        let word = words.next().ok_or(ParseError::MissingArgument(name))?;
        word.parse::<f64>().map_err(|_| ParseError::InvalidNumber(word.to_owned()))
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;
    Ok(Point::new(x, y))
}
