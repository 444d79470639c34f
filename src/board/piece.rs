//! Piece colors and grid coordinates.
//!
//! A `Coord` is always inside the 5x5 grid; constructors that take raw
//! numbers return `None` for anything off the board.

use std::fmt;

use serde::Serialize;

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// One of the two piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Piece {
    #[serde(rename = "b")]
    Black,
    #[serde(rename = "r")]
    Red,
}

/// Both colors, in turn order (black moves first).
pub const ALL_PIECES: [Piece; 2] = [Piece::Black, Piece::Red];

impl Piece {
    /// Returns the other color.
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    /// Returns the single-character abbreviation used on the board and in positions.
    pub const fn symbol(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }

    /// Parses a color from its single-character abbreviation.
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'b' => Some(Piece::Black),
            'r' => Some(Piece::Red),
            _ => None,
        }
    }

    /// Parses a color from `b`/`r` or its full lowercase name.
    pub fn from_name(name: &str) -> Option<Piece> {
        match name {
            "b" | "black" => Some(Piece::Black),
            "r" | "red" => Some(Piece::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell position: row 0-4 top to bottom, column 0-4 left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if it lies off the board.
    pub const fn new(row: usize, col: usize) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// Coordinate of the row-major cell index `0..25`.
    pub const fn from_index(index: usize) -> Option<Coord> {
        Coord::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index of this cell.
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Applies a (row, col) delta, returning `None` if the result leaves the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }

    /// Largest of the row and column gaps.
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col)) as usize
    }

    /// King-move adjacency: distinct cells at Chebyshev distance 1.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.chebyshev(other) == 1
    }

    /// Euclidean distance between two cells.
    pub fn distance(self, other: Coord) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Column letter `A`-`E`.
    pub const fn file_char(self) -> char {
        (b'A' + self.col) as char
    }

    /// Row digit `0`-`4`.
    pub const fn rank_char(self) -> char {
        (b'0' + self.row) as char
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
