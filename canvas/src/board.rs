//! Board model: the grid of tile kinds and the tile records painted over it.
//!
//! The board is rebuilt from scratch on every server snapshot: the session
//! calls [`Board::clear`] and then [`Board::set_tile`] once per occupied cell.
//! Nothing survives between snapshots except the grid size.
//!
//! Alongside the `cells` grid the board keeps one [`Tile`] per accepted
//! `set_tile` call. Tiles carry screen positions and, for move candidates, the
//! direction they represent; the renderer paints them and pointer hit-testing
//! reads them back.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::consts::{
    COLOR_BLACK, COLOR_BLACK_BLOCK, COLOR_BOTH, COLOR_CANDIDATE, COLOR_CLEAR, COLOR_WHITE, COLOR_WHITE_BLOCK,
};
use crate::geometry::{Cell, Direction, GridGeometry, Point};

/// What occupies a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Clear,
    BlockWhite,
    BlockBlack,
    PlayerWhite,
    PlayerBlack,
    /// Both players on the same cell.
    PlayerBoth,
    /// Transient overlay marking a legal move for the local player.
    MoveCandidate,
}

impl TileKind {
    /// Fill color used when painting this kind.
    #[must_use]
    pub fn color(self) -> u32 {
        match self {
            Self::Clear => COLOR_CLEAR,
            Self::BlockWhite => COLOR_WHITE_BLOCK,
            Self::BlockBlack => COLOR_BLACK_BLOCK,
            Self::PlayerWhite => COLOR_WHITE,
            Self::PlayerBlack => COLOR_BLACK,
            Self::PlayerBoth => COLOR_BOTH,
            Self::MoveCandidate => COLOR_CANDIDATE,
        }
    }
}

/// A painted tile on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub cell: Cell,
    pub kind: TileKind,
    /// Top-left corner in screen space.
    pub position: Point,
    pub alpha: f64,
    /// Set only for move candidates.
    pub direction: Option<Direction>,
}

/// The square game board.
#[derive(Debug, Clone)]
pub struct Board {
    geometry: GridGeometry,
    /// Row-major: index `y * width + x`.
    cells: Vec<TileKind>,
    tiles: Vec<Tile>,
}

impl Board {
    /// An all-clear `width` x `width` board at the default screen placement.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::with_geometry(GridGeometry::new(width))
    }

    #[must_use]
    pub fn with_geometry(geometry: GridGeometry) -> Self {
        let mut board = Self { geometry, cells: Vec::new(), tiles: Vec::new() };
        board.resize(geometry.width);
        board
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Reinitialize to an all-clear board of a new size.
    pub fn resize(&mut self, width: usize) {
        self.geometry.width = width;
        self.cells = vec![TileKind::Clear; width * width];
        self.tiles.clear();
    }

    /// Drop every tile and reset every cell to clear.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.cells.fill(TileKind::Clear);
    }

    /// Place a fully opaque tile. See [`Board::set_tile_with`].
    pub fn set_tile(&mut self, cell: Cell, kind: TileKind) -> bool {
        self.set_tile_with(cell, kind, 1.0, None)
    }

    /// Overwrite `cell` and record a tile for painting.
    ///
    /// Returns `false` without touching the board when `cell` is the absent
    /// sentinel (any negative coordinate) or lies past the far edge.
    pub fn set_tile_with(&mut self, cell: Cell, kind: TileKind, alpha: f64, direction: Option<Direction>) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        self.cells[index] = kind;
        self.tiles.push(Tile {
            cell,
            kind,
            position: self.board_to_world(cell),
            alpha,
            direction,
        });
        true
    }

    /// The kind at `cell`, or `None` when out of bounds.
    #[must_use]
    pub fn get_tile(&self, cell: Cell) -> Option<TileKind> {
        self.index(cell).map(|index| self.cells[index])
    }

    /// True iff both coordinates lie in `[0, width)`.
    #[must_use]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    #[must_use]
    pub fn board_to_world(&self, cell: Cell) -> Point {
        self.geometry.board_to_world(cell)
    }

    /// Nearest cell to a screen point. Check [`Board::is_in_bounds`] before use.
    #[must_use]
    pub fn world_to_board(&self, point: Point) -> Cell {
        self.geometry.world_to_board(point)
    }

    #[must_use]
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Painted tiles in placement order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn non_clear_count(&self) -> usize {
        self.cells.iter().filter(|kind| **kind != TileKind::Clear).count()
    }

    /// Direction of the move-candidate tile under `point`, if any.
    #[must_use]
    pub fn candidate_at(&self, point: Point) -> Option<Direction> {
        let size = self.geometry.tile_width();
        self.tiles
            .iter()
            .filter(|tile| tile.kind == TileKind::MoveCandidate)
            .find(|tile| contains(tile.position, size, point))
            .and_then(|tile| tile.direction)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
            return None;
        };
        let width = self.geometry.width;
        (x < width && y < width).then(|| y * width + x)
    }
}

/// True if `point` lies in the square of side `size` whose top-left is `corner`.
#[must_use]
pub fn contains(corner: Point, size: f64, point: Point) -> bool {
    point.x >= corner.x && point.y >= corner.y && point.x < corner.x + size && point.y < corner.y + size
}
