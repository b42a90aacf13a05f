//! Conversions between wire types and board types.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use canvas::shapes::Shape;
use canvas::{Cell, TileKind};
use frames::{Color, Coord, ShapeTemplate};

pub fn wire_direction(direction: canvas::Direction) -> frames::Direction {
    match direction {
        canvas::Direction::North => frames::Direction::North,
        canvas::Direction::South => frames::Direction::South,
        canvas::Direction::East => frames::Direction::East,
        canvas::Direction::West => frames::Direction::West,
    }
}

/// A reported player position, or the absent sentinel.
pub fn cell(coord: Option<Coord>) -> Cell {
    coord.map_or(Cell::ABSENT, |[x, y]| Cell::new(x, y))
}

pub fn coord(cell: Cell) -> Coord {
    [cell.x, cell.y]
}

pub fn shape(template: &ShapeTemplate) -> Shape {
    Shape::new(template.iter().map(|[dx, dy]| Cell::new(*dx, *dy)).collect())
}

pub fn player_tile(color: Color) -> TileKind {
    match color {
        Color::White => TileKind::PlayerWhite,
        Color::Black => TileKind::PlayerBlack,
    }
}

pub fn block_tile(color: Color) -> TileKind {
    match color {
        Color::White => TileKind::BlockWhite,
        Color::Black => TileKind::BlockBlack,
    }
}
