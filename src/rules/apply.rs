//! Applying moves to a shared board.
//!
//! `apply_opponent_move` is the boundary check for moves that arrive from
//! outside the engine; it leaves the board untouched on any error.
//! `place_move` is the engine's own unchecked mutator.

use crate::board::{Board, Move, MoveError, Piece};

/// Validates `mv` for `opponent` and applies it.
///
/// Step moves require the source to hold `opponent`, the destination to be
/// within one cell in each direction, and the destination to be empty.
/// Drops only require an empty destination.
pub fn apply_opponent_move(board: &mut Board, mv: Move, opponent: Piece) -> Result<(), MoveError> {
    validate_move(board, mv, opponent)?;
    place_move(board, mv, opponent);
    Ok(())
}

/// Checks `mv` for `piece` against `board` without mutating it.
pub fn validate_move(board: &Board, mv: Move, piece: Piece) -> Result<(), MoveError> {
    let to = mv.destination();
    if let Some(from) = mv.source() {
        if board.get(from) != Some(piece) {
            return Err(MoveError::InvalidSource { at: from, expected: piece });
        }
        if from.chebyshev(to) > 1 {
            return Err(MoveError::IllegalAdjacency { from, to });
        }
    }
    if !board.is_empty_at(to) {
        return Err(MoveError::OccupiedDestination { at: to });
    }
    Ok(())
}

/// Writes `mv` onto the board for `piece` without validation.
pub fn place_move(board: &mut Board, mv: Move, piece: Piece) {
    if let Some(from) = mv.source() {
        board.set(from, None);
    }
    board.set(mv.destination(), Some(piece));
}

/// Returns a copy of `board` with `mv` applied for `piece`.
pub fn with_move(board: &Board, mv: Move, piece: Piece) -> Board {
    let mut next = *board;
    place_move(&mut next, mv, piece);
    next
}
