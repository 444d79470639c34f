//! Text notation for coordinates, moves and positions.
//!
//! Coordinates are a column letter `A`-`E` followed by a row digit `0`-`4`
//! (`B3` is row 3, column 1). Drops are written as their destination;
//! steps as `from-to` (`A2-B3`). A position lists the five rows top to
//! bottom separated by `/`, each row five characters from `r`, `b`, `.`:
//!
//! `rrrr./...../..b../...../.....`

use thiserror::Error;

use crate::board::{Board, Coord, Move, Piece, ALL_PIECES, BOARD_SIZE, PIECES_PER_PLAYER};

/// Errors that can occur when parsing notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid coordinate '{0}', expected a column A-E and a row 0-4 (e.g. B3)")]
    InvalidCoord(String),

    #[error("invalid move '{0}', expected a drop like B3 or a step like A2-B3")]
    InvalidMove(String),

    #[error("expected {size} rows separated by '/', got {0}", size = BOARD_SIZE)]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected {size}", size = BOARD_SIZE)]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character '{0}'")]
    InvalidCell(char),

    #[error("{piece} has {count} pieces, at most {max} allowed", max = PIECES_PER_PLAYER)]
    TooManyPieces { piece: Piece, count: usize },
}

/// Parses a coordinate like `B3` (the column letter may be lowercase).
pub fn parse_coord(s: &str) -> Result<Coord, NotationError> {
    let s = s.trim();
    let invalid = || NotationError::InvalidCoord(s.to_string());
    let mut chars = s.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let col = match file.to_ascii_uppercase() {
        c @ 'A'..='E' => c as usize - 'A' as usize,
        _ => return Err(invalid()),
    };
    let row = rank.to_digit(10).ok_or_else(invalid)? as usize;
    Coord::new(row, col).ok_or_else(invalid)
}

/// Parses a drop (`B3`) or a step (`A2-B3`).
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    match s.split_once('-') {
        None => Ok(Move::Drop { to: parse_coord(s)? }),
        Some((from, to)) => {
            let from = parse_coord(from)?;
            let to = parse_coord(to)?;
            if from == to {
                return Err(NotationError::InvalidMove(s.to_string()));
            }
            Ok(Move::Step { from, to })
        }
    }
}

/// Formats a move; the inverse of `parse_move`.
pub fn format_move(mv: Move) -> String {
    mv.to_string()
}

/// Parses a position string into a board.
pub fn parse_position(s: &str) -> Result<Board, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (r, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != BOARD_SIZE {
            return Err(NotationError::WrongRowLength { row: r, len });
        }
        for (c, ch) in row.chars().enumerate() {
            let cell = match ch {
                '.' => None,
                other => Some(Piece::from_symbol(other).ok_or(NotationError::InvalidCell(other))?),
            };
            if let Some(at) = Coord::new(r, c) {
                board.set(at, cell);
            }
        }
    }

    for piece in ALL_PIECES {
        let count = board.count_of(piece);
        if count > PIECES_PER_PLAYER {
            return Err(NotationError::TooManyPieces { piece, count });
        }
    }
    Ok(board)
}

/// Encodes a board as a position string.
pub fn encode_position(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for (at, cell) in board.cells() {
        if at.col() == 0 && at.row() > 0 {
            out.push('/');
        }
        out.push(cell.map_or('.', Piece::symbol));
    }
    out
}
