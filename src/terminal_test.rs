use super::*;
use canvas::{Board, Cell};

use crate::session::GameSession;

fn active_session() -> GameSession {
    let mut session = GameSession::new("bob");
    session.on_text(r#"{"type":"joined","board_width":4,"moves_per_turn":2}"#);
    session.on_text(
        r#"{"type":"start","turn":"white","moves_remaining":2,"your_color":"white","shapes":[[[0,0]]],
            "board":{"white_player":[0,0],"black_player":[3,3],"white_block":[[2,0]],"black_block":[[0,2]]}}"#,
    );
    session
}

#[test]
fn glyphs_cover_every_kind() {
    assert_eq!(glyph(TileKind::Clear), '.');
    assert_eq!(glyph(TileKind::BlockWhite), 'w');
    assert_eq!(glyph(TileKind::BlockBlack), 'b');
    assert_eq!(glyph(TileKind::PlayerWhite), 'W');
    assert_eq!(glyph(TileKind::PlayerBlack), 'B');
    assert_eq!(glyph(TileKind::PlayerBoth), 'X');
    assert_eq!(glyph(TileKind::MoveCandidate), '+');
}

#[test]
fn session_frame_shows_board_and_hud() {
    let session = active_session();
    let mut term = TerminalRenderer::new(false);
    session.render(&mut term);
    assert_eq!(term.frame(), "W+w.\n+...\nb...\n...B\nYou:\nTurn:\nMoves: 2\n");
}

#[test]
fn multi_line_header_is_split() {
    let mut session = active_session();
    session.on_text(r#"{"type":"end","result":"win","reason":"shot"}"#);
    let mut term = TerminalRenderer::new(false);
    session.render(&mut term);
    assert!(term.frame().ends_with("You Win!\n(shot)\n"));
}

#[test]
fn ghost_tiles_overlay_board_cells() {
    let board = Board::new(4);
    let mut term = TerminalRenderer::new(false);
    term.draw_board(board.width(), board.cells());
    term.draw_tile(board.board_to_world(Cell::new(1, 2)), 10.0, TileKind::PlayerBoth, 1.0);
    // off-board tiles are dropped
    term.draw_tile(Point::new(5.0, 900.0), 10.0, TileKind::BlockWhite, 1.0);
    term.draw_tile(Point::new(-80.0, 5.0), 10.0, TileKind::BlockWhite, 1.0);
    assert_eq!(term.frame(), "....\n....\n.X..\n....\n");
}

#[test]
fn present_writes_and_resets() {
    let session = active_session();
    let mut term = TerminalRenderer::new(false);
    session.render(&mut term);
    let mut out = Vec::new();
    term.present(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("W+w.\n"));
    assert!(text.ends_with("Moves: 2\n\n"));
    assert_eq!(term.frame(), "");
}

#[test]
fn colored_frame_uses_tile_colors() {
    let board = Board::new(1);
    let mut term = TerminalRenderer::new(true);
    term.draw_board(board.width(), board.cells());
    assert_eq!(term.frame(), "\x1b[38;2;0;0;0m\x1b[48;2;17;17;17m.\x1b[0m\n");
}
