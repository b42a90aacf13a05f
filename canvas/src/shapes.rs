//! Shape placement: the tray of placeable polyominoes and the drag gesture
//! that drops one onto the board.
//!
//! The controller is a small state machine. [`DragState::Idle`] waits for a
//! pick-up; [`DragState::Dragging`] carries the offset from the cursor to the
//! shape's anchor tile so the ghost follows the pointer without jumping. The
//! matching release always returns to idle and emits [`Action::Place`].
//!
//! Placement is optimistic. The controller does not check that the origin is
//! on the board or that the shape fits; the server decides.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use crate::board::{Board, TileKind, contains};
use crate::consts::{TRAY_GAP_PAD, TRAY_SHAPE_SPACING, TRAY_TILE_SHRINK, TRAY_TOP_MARGIN};
use crate::geometry::{Cell, GridGeometry, Point};

/// An immutable polyomino template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// `(dx, dy)` offsets of each square; the first is the anchor.
    pub offsets: Vec<Cell>,
}

impl Shape {
    #[must_use]
    pub fn new(offsets: Vec<Cell>) -> Self {
        Self { offsets }
    }
}

/// One square of a shape as laid out in the tray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayTile {
    pub shape_index: usize,
    /// Top-left corner in screen space.
    pub position: Point,
    /// Offset from the shape's tray origin, in pixels.
    pub base: Point,
}

/// The drag gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        shape_index: usize,
        /// Anchor tile position minus the cursor at pick-up.
        mouse_offset: Point,
    },
}

/// Work for the host after a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask the server to place `shape_index` with its anchor at `origin`.
    Place { shape_index: usize, origin: Cell },
    RenderNeeded,
}

/// Owns the shape tray and the single drag gesture.
#[derive(Debug, Clone)]
pub struct ShapeController {
    shapes: Vec<Shape>,
    tray: Vec<TrayTile>,
    tile_width: f64,
    tint: TileKind,
    drag: DragState,
    cursor: Point,
    enabled: bool,
}

impl ShapeController {
    /// Lay out `shapes` in a tray below the board described by `geometry`.
    ///
    /// Tray tiles are painted in `tint` (the local player's block color). The
    /// controller starts disabled; the session enables it on the local turn.
    #[must_use]
    pub fn new(shapes: Vec<Shape>, geometry: &GridGeometry, tint: TileKind) -> Self {
        let tile_width = geometry.tile_width() - TRAY_TILE_SHRINK;
        let gap = geometry.line_thickness + TRAY_GAP_PAD;
        let tray_origin = Point::new(geometry.origin.x, geometry.extent + TRAY_TOP_MARGIN);
        let tray = layout_tray(&shapes, tray_origin, tile_width, gap);
        Self {
            shapes,
            tray,
            tile_width,
            tint,
            drag: DragState::Idle,
            cursor: Point::default(),
            enabled: false,
        }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn tray_tiles(&self) -> &[TrayTile] {
        &self.tray
    }

    /// Side length of tray and ghost tiles.
    #[must_use]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    #[must_use]
    pub fn tint(&self) -> TileKind {
        self.tint
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gate new pick-ups. Does not cancel a drag already in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Last known cursor position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Screen position of a shape's anchor tile in the tray.
    #[must_use]
    pub fn anchor(&self, shape_index: usize) -> Option<Point> {
        self.tray
            .iter()
            .find(|tile| tile.shape_index == shape_index)
            .map(|tile| tile.position)
    }

    /// Index of the shape whose tray tile contains `point`.
    #[must_use]
    pub fn shape_at(&self, point: Point) -> Option<usize> {
        self.tray
            .iter()
            .find(|tile| contains(tile.position, self.tile_width, point))
            .map(|tile| tile.shape_index)
    }

    /// Start dragging `shape_index` from `cursor`.
    ///
    /// No-op when disabled, when a drag is already active, or when the index
    /// names no shape.
    pub fn pick_up(&mut self, shape_index: usize, cursor: Point) -> Vec<Action> {
        if !self.enabled || self.is_dragging() {
            return Vec::new();
        }
        let Some(anchor) = self.anchor(shape_index) else {
            return Vec::new();
        };
        self.cursor = cursor;
        self.drag = DragState::Dragging { shape_index, mouse_offset: anchor - cursor };
        vec![Action::RenderNeeded]
    }

    /// Track the pointer. Requests a redraw only while dragging.
    pub fn drag(&mut self, cursor: Point) -> Vec<Action> {
        self.cursor = cursor;
        if self.is_dragging() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Finish the drag and emit a placement at the cell under the ghost anchor.
    pub fn release(&mut self, cursor: Point, board: &Board) -> Vec<Action> {
        self.cursor = cursor;
        let DragState::Dragging { shape_index, mouse_offset } = self.drag else {
            return Vec::new();
        };
        self.drag = DragState::Idle;
        let origin = board.world_to_board(cursor + mouse_offset);
        vec![Action::Place { shape_index, origin }, Action::RenderNeeded]
    }

    /// Screen positions of the dragged shape's ghost tiles.
    #[must_use]
    pub fn ghost_tiles(&self) -> Vec<Point> {
        let DragState::Dragging { shape_index, mouse_offset } = self.drag else {
            return Vec::new();
        };
        let anchor = self.cursor + mouse_offset;
        self.tray
            .iter()
            .filter(|tile| tile.shape_index == shape_index)
            .map(|tile| anchor + tile.base)
            .collect()
    }
}

/// Place shapes left to right, each starting past the previous shape's
/// right-most square.
fn layout_tray(shapes: &[Shape], tray_origin: Point, tile_width: f64, gap: f64) -> Vec<TrayTile> {
    let step = tile_width + gap;
    let mut pos = Point::new(tray_origin.x + gap, tray_origin.y + gap);
    let mut tray = Vec::new();
    for (shape_index, shape) in shapes.iter().enumerate() {
        let mut right_most = pos.x;
        for offset in &shape.offsets {
            let base = Point::new(f64::from(offset.x) * step, f64::from(offset.y) * step);
            let position = pos + base;
            right_most = right_most.max(position.x);
            tray.push(TrayTile { shape_index, position, base });
        }
        pos.x = right_most + step + TRAY_SHAPE_SPACING;
    }
    tray
}
