#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use crate::consts::{BOARD_EXTENT_PX, BOARD_ORIGIN_X, BOARD_ORIGIN_Y, LINE_THICKNESS};

/// A point in screen space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A grid coordinate. Also used for shape offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Sentinel for a player the server did not report.
    pub const ABSENT: Cell = Cell { x: -1, y: -1 };

    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if either coordinate is negative.
    #[must_use]
    pub fn is_absent(self) -> bool {
        self.x < 0 || self.y < 0
    }

    /// The neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Order in which move candidates are examined.
    pub const CANDIDATE_ORDER: [Direction; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Unit step in grid coordinates (y grows downward).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// Affine mapping between board cells and screen pixels.
///
/// The board is a `width` x `width` square drawn inside `extent` pixels with
/// its border's top-left corner at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub width: usize,
    pub extent: f64,
    pub origin: Point,
    pub line_thickness: f64,
}

impl GridGeometry {
    /// Geometry for a `width`-cell board at the default screen placement.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            extent: BOARD_EXTENT_PX,
            origin: Point::new(BOARD_ORIGIN_X, BOARD_ORIGIN_Y),
            line_thickness: LINE_THICKNESS,
        }
    }

    /// Pixel distance between the top-left corners of adjacent cells.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stride(&self) -> f64 {
        self.extent / self.width.max(1) as f64
    }

    /// Side length of a painted tile, leaving room for the grid lines.
    #[must_use]
    pub fn tile_width(&self) -> f64 {
        self.stride() - self.line_thickness - self.line_thickness / 4.0
    }

    /// Screen position of a cell's top-left corner.
    #[must_use]
    pub fn board_to_world(&self, cell: Cell) -> Point {
        let half_line = self.line_thickness / 2.0;
        let stride = self.stride();
        Point::new(
            f64::from(cell.x) * stride + self.origin.x + half_line,
            f64::from(cell.y) * stride + self.origin.y + half_line,
        )
    }

    /// Nearest cell to a screen point. The result may be out of bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_board(&self, point: Point) -> Cell {
        let half_line = self.line_thickness / 2.0;
        let stride = self.stride();
        Cell::new(
            ((point.x - self.origin.x - half_line) / stride).round() as i32,
            ((point.y - self.origin.y - half_line) / stride).round() as i32,
        )
    }
}
