//! Move descriptors and the board-diff translator.
//!
//! A `Move` is not tied to a board: it describes the difference between
//! two snapshots. Drops name only a destination; steps name the cell a
//! piece leaves and the adjacent cell it lands on.

use std::fmt;

use thiserror::Error;

use super::piece::{Coord, Piece};
use super::state::{Board, Phase};

/// Errors raised while validating or reconstructing a move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no {expected} piece at {at}")]
    InvalidSource { at: Coord, expected: Piece },

    #[error("illegal move: {to} is not adjacent to {from}")]
    IllegalAdjacency { from: Coord, to: Coord },

    #[error("destination {at} is occupied")]
    OccupiedDestination { at: Coord },

    #[error("cannot derive a {phase:?}-phase move: {added} cell(s) filled, {removed} cell(s) cleared, {changed} cell(s) recolored")]
    InconsistentDiff {
        phase: Phase,
        added: usize,
        removed: usize,
        changed: usize,
    },
}

/// A single ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Drop phase: place a new piece on `to`.
    Drop { to: Coord },
    /// Move phase: relocate the piece on `from` to the adjacent cell `to`.
    Step { from: Coord, to: Coord },
}

impl Move {
    /// The cell that becomes occupied.
    pub const fn destination(self) -> Coord {
        match self {
            Move::Drop { to } | Move::Step { to, .. } => to,
        }
    }

    /// The cell that is vacated, for step moves.
    pub const fn source(self) -> Option<Coord> {
        match self {
            Move::Drop { .. } => None,
            Move::Step { from, .. } => Some(from),
        }
    }

    /// The move as `[destination]` or `[destination, source]`.
    pub fn coords(self) -> Vec<Coord> {
        match self {
            Move::Drop { to } => vec![to],
            Move::Step { from, to } => vec![to, from],
        }
    }

    /// Rebuilds a move from `[destination]` or `[destination, source]`.
    pub fn from_coords(coords: &[Coord]) -> Option<Move> {
        match *coords {
            [to] => Some(Move::Drop { to }),
            [to, from] => Some(Move::Step { from, to }),
            _ => None,
        }
    }

    /// Derives the move that turns `before` into `after`.
    ///
    /// In the drop phase exactly one cell must go from empty to occupied. In
    /// the move phase one cell must additionally go from occupied to empty.
    /// No cell may change color. Anything else means the two boards are not
    /// a single ply apart.
    pub fn between(before: &Board, after: &Board) -> Result<Move, MoveError> {
        let phase = before.phase();
        let mut added = Vec::with_capacity(1);
        let mut removed = Vec::with_capacity(1);
        let mut changed = 0;

        for ((at, old), (_, new)) in before.cells().zip(after.cells()) {
            match (old, new) {
                (None, Some(_)) => added.push(at),
                (Some(_), None) => removed.push(at),
                (Some(a), Some(b)) if a != b => changed += 1,
                _ => {}
            }
        }

        let inconsistent = || MoveError::InconsistentDiff {
            phase,
            added: added.len(),
            removed: removed.len(),
            changed,
        };

        if changed != 0 {
            return Err(inconsistent());
        }
        match (phase, added.as_slice(), removed.as_slice()) {
            (Phase::Drop, [to], []) => Ok(Move::Drop { to: *to }),
            (Phase::Move, [to], [from]) => Ok(Move::Step { from: *from, to: *to }),
            _ => Err(inconsistent()),
        }
    }
}

/// Drops render as the destination (`B3`), steps as `from-to` (`A2-B3`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Drop { to } => write!(f, "{}", to),
            Move::Step { from, to } => write!(f, "{}-{}", from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn full_board() -> Board {
        Board::with_pieces(&[
            (0, 0, Piece::Red),
            (0, 2, Piece::Red),
            (2, 1, Piece::Red),
            (4, 4, Piece::Red),
            (1, 0, Piece::Black),
            (3, 3, Piece::Black),
            (4, 0, Piece::Black),
            (2, 4, Piece::Black),
        ])
    }

    #[test]
    fn coords_put_destination_first() {
        let m = Move::Step { from: at(1, 1), to: at(2, 2) };
        assert_eq!(m.coords(), vec![at(2, 2), at(1, 1)]);
        assert_eq!(Move::from_coords(&m.coords()), Some(m));
        assert_eq!(Move::from_coords(&[]), None);
        assert_eq!(Move::from_coords(&[at(0, 0); 3]), None);
    }

    #[test]
    fn between_finds_drop() {
        let before = Board::with_pieces(&[(1, 1, Piece::Black)]);
        let mut after = before;
        after.set(at(2, 3), Some(Piece::Red));
        assert_eq!(Move::between(&before, &after), Ok(Move::Drop { to: at(2, 3) }));
    }

    #[test]
    fn between_finds_step() {
        let before = full_board();
        let mut after = before;
        after.set(at(2, 1), None);
        after.set(at(3, 2), Some(Piece::Red));
        assert_eq!(
            Move::between(&before, &after),
            Ok(Move::Step { from: at(2, 1), to: at(3, 2) })
        );
    }

    #[test]
    fn between_rejects_identical_boards() {
        let board = full_board();
        assert!(matches!(
            Move::between(&board, &board),
            Err(MoveError::InconsistentDiff { added: 0, removed: 0, .. })
        ));
    }

    #[test]
    fn between_rejects_two_drops() {
        let before = Board::empty();
        let after = Board::with_pieces(&[(0, 0, Piece::Red), (0, 1, Piece::Red)]);
        assert!(matches!(
            Move::between(&before, &after),
            Err(MoveError::InconsistentDiff { added: 2, .. })
        ));
    }

    #[test]
    fn between_rejects_drop_in_move_phase() {
        let before = full_board();
        let mut after = before;
        after.set(at(2, 2), Some(Piece::Red));
        assert!(Move::between(&before, &after).is_err());
    }

    #[test]
    fn between_rejects_recolored_cell() {
        let before = full_board();
        let mut after = before;
        after.set(at(0, 0), Some(Piece::Black));
        assert!(matches!(
            Move::between(&before, &after),
            Err(MoveError::InconsistentDiff { changed: 1, .. })
        ));
    }

    #[test]
    fn display_notation() {
        assert_eq!(Move::Drop { to: at(3, 1) }.to_string(), "B3");
        assert_eq!(Move::Step { from: at(2, 0), to: at(3, 1) }.to_string(), "A2-B3");
    }
}
