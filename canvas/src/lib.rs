//! Board, placement, and input core for the Ping game client.
//!
//! This crate holds everything about the game screen that does not depend on
//! the network or on a drawing backend: the grid model and its pixel mapping,
//! the move-candidate overlay, the shape tray with its drag gesture, and the
//! input event types the host forwards. The host wires device events in,
//! executes the returned [`shapes::Action`]s, and implements
//! [`render::Renderer`] to put pixels on screen.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Tile grid, painted tile records, candidate hit-testing |
//! | [`geometry`] | Points, cells, directions, and the cell/pixel transform |
//! | [`candidates`] | Legal one-step moves for the local player |
//! | [`shapes`] | Shape tray layout and the pick-up/drag/release state machine |
//! | [`input`] | Keys, modifiers, and input events |
//! | [`render`] | The renderer seam and board/tray draw helpers |
//! | [`consts`] | Screen layout and color constants |

pub mod board;
pub mod candidates;
pub mod consts;
pub mod geometry;
pub mod input;
pub mod render;
pub mod shapes;

pub use board::{Board, Tile, TileKind};
pub use geometry::{Cell, Direction, GridGeometry, Point};
