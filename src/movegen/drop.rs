//! Drop-phase move generation.

use crate::board::{Board, Move};

/// Every empty cell as a drop, in row-major order.
pub fn legal_drops(board: &Board) -> Vec<Move> {
    board.empty_cells().map(|to| Move::Drop { to }).collect()
}
