//! Move-candidate engine: which orthogonal neighbours the local player may step to.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use crate::board::{Board, TileKind};
use crate::consts::CANDIDATE_ALPHA;
use crate::geometry::{Cell, Direction};

/// Legal one-step moves from `from`, in east, south, west, north order.
///
/// A neighbour qualifies when it is on the board and currently clear.
#[must_use]
pub fn move_candidates(board: &Board, from: Cell) -> Vec<(Direction, Cell)> {
    if from.is_absent() {
        return Vec::new();
    }
    Direction::CANDIDATE_ORDER
        .iter()
        .map(|direction| (*direction, from.step(*direction)))
        .filter(|(_, target)| board.get_tile(*target) == Some(TileKind::Clear))
        .collect()
}

/// Overlay a translucent candidate tile on every legal move from `from`.
///
/// Returns the number of candidates added.
pub fn add_move_candidates(board: &mut Board, from: Cell) -> usize {
    let candidates = move_candidates(board, from);
    for (direction, target) in &candidates {
        board.set_tile_with(*target, TileKind::MoveCandidate, CANDIDATE_ALPHA, Some(*direction));
    }
    candidates.len()
}
