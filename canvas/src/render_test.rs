#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::{Cell, GridGeometry};
use crate::shapes::Shape;

#[derive(Default)]
struct Recorder {
    boards: Vec<(usize, usize)>,
    tiles: Vec<(Point, TileKind, f64)>,
    texts: Vec<String>,
}

impl Renderer for Recorder {
    fn draw_board(&mut self, width: usize, cells: &[TileKind]) {
        self.boards.push((width, cells.len()));
    }

    fn draw_tile(&mut self, position: Point, _size: f64, kind: TileKind, alpha: f64) {
        self.tiles.push((position, kind, alpha));
    }

    fn draw_text(&mut self, label: &str, _position: Point) {
        self.texts.push(label.to_owned());
    }
}

fn geometry() -> GridGeometry {
    GridGeometry { width: 8, extent: 400.0, origin: Point::new(5.0, 5.0), line_thickness: 4.0 }
}

#[test]
fn draw_board_paints_grid_then_tiles() {
    let mut board = Board::with_geometry(geometry());
    board.set_tile(Cell::new(1, 1), TileKind::PlayerWhite);
    board.set_tile_with(Cell::new(2, 1), TileKind::MoveCandidate, 0.5, None);

    let mut rec = Recorder::default();
    draw_board(&mut rec, &board);

    assert_eq!(rec.boards, vec![(8, 64)]);
    assert_eq!(rec.tiles.len(), 2);
    assert_eq!(rec.tiles[0].1, TileKind::PlayerWhite);
    assert_eq!(rec.tiles[1].1, TileKind::MoveCandidate);
    assert_eq!(rec.tiles[1].2, 0.5);
    assert!(rec.texts.is_empty());
}

#[test]
fn disabled_tray_draws_nothing() {
    let shapes = ShapeController::new(vec![Shape::new(vec![Cell::new(0, 0)])], &geometry(), TileKind::BlockBlack);
    let mut rec = Recorder::default();
    draw_shapes(&mut rec, &shapes);
    assert!(rec.tiles.is_empty());
}

#[test]
fn enabled_tray_draws_tinted_tiles_and_ghost() {
    let mut shapes = ShapeController::new(
        vec![Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0)])],
        &geometry(),
        TileKind::BlockBlack,
    );
    shapes.set_enabled(true);

    let mut rec = Recorder::default();
    draw_shapes(&mut rec, &shapes);
    assert_eq!(rec.tiles.len(), 2);
    assert!(rec.tiles.iter().all(|(_, kind, _)| *kind == TileKind::BlockBlack));

    shapes.pick_up(0, Point::new(20.0, 425.0));
    let mut rec = Recorder::default();
    draw_shapes(&mut rec, &shapes);
    assert_eq!(rec.tiles.len(), 4);
    assert_eq!(rec.tiles[2].1, TileKind::PlayerBoth);
    assert_eq!(rec.tiles[3].1, TileKind::PlayerBoth);
}
