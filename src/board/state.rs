//! Board representation.
//!
//! A fixed 5x5 grid of optional pieces. The board is `Copy` so successor
//! generation and search can work on independent snapshots without heap
//! allocation.

use std::fmt;

use super::piece::{Coord, Piece, BOARD_SIZE, CELL_COUNT, PIECES_PER_PLAYER};

/// Stage of the game, derived from how many pieces are on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fewer than 8 pieces placed; moves are drops onto empty cells.
    Drop,
    /// All 8 pieces placed; moves relocate a piece to an adjacent empty cell.
    Move,
}

/// Total pieces on the board once the drop phase is over.
pub const MOVE_PHASE_PIECES: usize = 2 * PIECES_PER_PLAYER;

/// A 5x5 Teeko board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board { cells: [[None; BOARD_SIZE]; BOARD_SIZE] }
    }

    /// Builds a board from a list of occupied cells.
    ///
    /// Coordinates that fall off the grid are ignored.
    pub fn with_pieces(pieces: &[(usize, usize, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(row, col, piece) in pieces {
            if let Some(at) = Coord::new(row, col) {
                board.set(at, Some(piece));
            }
        }
        board
    }

    pub fn get(&self, at: Coord) -> Option<Piece> {
        self.cells[at.row()][at.col()]
    }

    pub fn set(&mut self, at: Coord, cell: Option<Piece>) {
        self.cells[at.row()][at.col()] = cell;
    }

    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `piece`.
    pub fn count_of(&self, piece: Piece) -> usize {
        self.cells.iter().flatten().filter(|c| **c == Some(piece)).count()
    }

    /// Current phase, recomputed from the piece count on every call.
    pub fn phase(&self) -> Phase {
        if self.piece_count() < MOVE_PHASE_PIECES {
            Phase::Drop
        } else {
            Phase::Move
        }
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Piece>)> + '_ {
        (0..CELL_COUNT).filter_map(move |i| Coord::from_index(i).map(|at| (at, self.get(at))))
    }

    /// Iterates the cells holding `piece`, in row-major order.
    pub fn positions_of(&self, piece: Piece) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(move |(_, cell)| *cell == Some(piece))
            .map(|(at, _)| at)
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter(|(_, cell)| cell.is_none()).map(|(at, _)| at)
    }
}

/// Renders the board with row labels 0-4 and column labels A-E.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}:", r)?;
            for cell in row {
                let c = cell.map_or('.', Piece::symbol);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E")
    }
}
