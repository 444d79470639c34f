//! Terminal-state detection.
//!
//! A color wins with four identical pieces in a horizontal, vertical or
//! diagonal line, or in a 2x2 block. The patterns are laid out once at
//! compile time in scan order; checking a board walks the fixed table and
//! never allocates.

use crate::board::{Board, Coord, Piece, BOARD_SIZE};

/// Number of distinct winning patterns on a 5x5 board.
pub const WIN_PATTERN_COUNT: usize = 44;

/// Every winning group of four cells, as `(row, col)` pairs.
///
/// Scan order: rows, columns, `\` diagonals, `/` diagonals, 2x2 blocks.
pub static WIN_PATTERNS: [[(usize, usize); 4]; WIN_PATTERN_COUNT] = build_patterns();

const fn build_patterns() -> [[(usize, usize); 4]; WIN_PATTERN_COUNT] {
    let mut out = [[(0, 0); 4]; WIN_PATTERN_COUNT];
    let mut n = 0;

    // Horizontal runs.
    let mut r = 0;
    while r < BOARD_SIZE {
        let mut c = 0;
        while c + 3 < BOARD_SIZE {
            out[n] = [(r, c), (r, c + 1), (r, c + 2), (r, c + 3)];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    // Vertical runs.
    let mut c = 0;
    while c < BOARD_SIZE {
        let mut r = 0;
        while r + 3 < BOARD_SIZE {
            out[n] = [(r, c), (r + 1, c), (r + 2, c), (r + 3, c)];
            n += 1;
            r += 1;
        }
        c += 1;
    }

    // Top-left to bottom-right.
    let mut r = 0;
    while r + 3 < BOARD_SIZE {
        let mut c = 0;
        while c + 3 < BOARD_SIZE {
            out[n] = [(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    // Bottom-left to top-right.
    let mut r = 3;
    while r < BOARD_SIZE {
        let mut c = 0;
        while c + 3 < BOARD_SIZE {
            out[n] = [(r, c), (r - 1, c + 1), (r - 2, c + 2), (r - 3, c + 3)];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    // 2x2 blocks.
    let mut r = 0;
    while r + 1 < BOARD_SIZE {
        let mut c = 0;
        while c + 1 < BOARD_SIZE {
            out[n] = [(r, c), (r, c + 1), (r + 1, c), (r + 1, c + 1)];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    out
}

fn cell(board: &Board, (row, col): (usize, usize)) -> Option<Piece> {
    Coord::new(row, col).and_then(|at| board.get(at))
}

/// Returns the color owning the first complete pattern in scan order.
pub fn winner(board: &Board) -> Option<Piece> {
    for pattern in WIN_PATTERNS.iter() {
        let first = match cell(board, pattern[0]) {
            Some(p) => p,
            None => continue,
        };
        if pattern[1..].iter().all(|&rc| cell(board, rc) == Some(first)) {
            return Some(first);
        }
    }
    None
}

/// Outcome of `board` from `me`'s point of view: +1 win, -1 loss, 0 undecided.
pub fn terminal_value(board: &Board, me: Piece) -> i32 {
    match winner(board) {
        Some(p) if p == me => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// Whether either color has already won.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some()
}
