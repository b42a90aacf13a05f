//! Rendering seam: the drawing calls the game makes, and helpers that issue
//! them for the board and the shape tray.
//!
//! The crate never touches a real surface. A host implements [`Renderer`] on
//! top of whatever it paints with; the helpers here only decide what to draw
//! and where.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::board::{Board, TileKind};
use crate::geometry::Point;
use crate::shapes::ShapeController;

/// Drawing surface implemented by the host.
pub trait Renderer {
    /// Paint the empty grid. `cells` is row-major, `y * width + x`.
    fn draw_board(&mut self, width: usize, cells: &[TileKind]);

    /// Paint a filled square of side `size` with its top-left at `position`.
    fn draw_tile(&mut self, position: Point, size: f64, kind: TileKind, alpha: f64);

    /// Paint a line of status text anchored at `position`.
    fn draw_text(&mut self, label: &str, position: Point);
}

/// Paint the grid and every placed tile in placement order.
pub fn draw_board(renderer: &mut dyn Renderer, board: &Board) {
    renderer.draw_board(board.width(), board.cells());
    let size = board.geometry().tile_width();
    for tile in board.tiles() {
        renderer.draw_tile(tile.position, size, tile.kind, tile.alpha);
    }
}

/// Paint the shape tray and, while dragging, the ghost of the picked shape.
///
/// Nothing is drawn while the controller is disabled.
pub fn draw_shapes(renderer: &mut dyn Renderer, shapes: &ShapeController) {
    if !shapes.is_enabled() {
        return;
    }
    let size = shapes.tile_width();
    for tile in shapes.tray_tiles() {
        renderer.draw_tile(tile.position, size, shapes.tint(), 1.0);
    }
    for position in shapes.ghost_tiles() {
        renderer.draw_tile(position, size, TileKind::PlayerBoth, 1.0);
    }
}
