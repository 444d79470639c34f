//! Legal move generation.
//!
//! Produces every move, and every successor board, reachable by one ply
//! for a given color. Generation order is part of the contract: the
//! search breaks ties in favor of the earliest successor.

pub mod drop;
pub mod step;

use crate::board::{Board, Move, Phase, Piece};
use crate::rules::with_move;

/// Legal moves for `piece` in generation order.
///
/// Drops during the drop phase, single steps afterwards.
pub fn legal_moves(board: &Board, piece: Piece) -> Vec<Move> {
    match board.phase() {
        Phase::Drop => drop::legal_drops(board),
        Phase::Move => step::legal_steps(board, piece),
    }
}

/// Every board reachable by one legal move of `piece`, in generation order.
///
/// The input board is not modified; each successor is an independent copy.
pub fn successors(board: &Board, piece: Piece) -> Vec<Board> {
    legal_moves(board, piece)
        .into_iter()
        .map(|mv| with_move(board, mv, piece))
        .collect()
}
