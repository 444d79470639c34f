//! Move-phase move generation.
//!
//! Each piece may step to any of its eight king-move neighbors that is on
//! the board and empty.

use crate::board::{Board, Move, Piece};

/// Neighbor offsets as (row, col) deltas, in generation order.
pub const STEP_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// All single steps for `piece`: sources in row-major order, then offsets
/// in `STEP_OFFSETS` order.
pub fn legal_steps(board: &Board, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4 * STEP_OFFSETS.len());
    for from in board.positions_of(piece) {
        for &(dr, dc) in STEP_OFFSETS.iter() {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            if board.is_empty_at(to) {
                moves.push(Move::Step { from, to });
            }
        }
    }
    moves
}
