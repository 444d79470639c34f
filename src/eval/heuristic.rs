//! Heuristic position evaluation.
//!
//! Scores a non-terminal board from one color's perspective by comparing
//! how tightly each side's pieces are clustered. Compact formations are
//! closer to completing a line or block, so a side whose pieces sit close
//! together relative to the opponent's scores higher.
//!
//! Design: no heap allocation. Pairwise distances are summed straight off
//! the board's row-major iterators.

use crate::board::{Board, Piece};

/// Heuristic scores are clamped to `[-HEURISTIC_BOUND, HEURISTIC_BOUND]`
/// so they never tie with a proven win or loss.
pub const HEURISTIC_BOUND: f64 = 0.999;

/// Sum of Euclidean distances over all ordered pairs of distinct `piece` cells.
///
/// Each unordered pair is counted twice; the factor cancels in `evaluate`.
pub fn cluster_distance(board: &Board, piece: Piece) -> f64 {
    let mut total = 0.0;
    for a in board.positions_of(piece) {
        for b in board.positions_of(piece) {
            if a != b {
                total += a.distance(b);
            }
        }
    }
    total
}

/// Evaluates `board` for `me`, returning a score strictly inside (-1, 1).
///
/// `1 - 2 * mine / (mine + theirs)` over the cluster distances. While the
/// opponent has a single piece their cluster distance is zero, which would
/// make every board look equally bad; the distance from our last piece (in
/// row-major order) to their first piece stands in for it. A board where
/// either side has no pieces evaluates to 0.
///
/// Only meaningful for non-terminal boards.
pub fn evaluate(board: &Board, me: Piece) -> f64 {
    let opp = me.opponent();
    let (Some(last_mine), Some(first_theirs)) =
        (board.positions_of(me).last(), board.positions_of(opp).next())
    else {
        return 0.0;
    };

    let mine = cluster_distance(board, me);
    let mut theirs = cluster_distance(board, opp);
    if theirs == 0.0 {
        theirs = last_mine.distance(first_theirs);
    }

    let total = mine + theirs;
    if total == 0.0 {
        return 0.0;
    }
    (1.0 - 2.0 * mine / total).clamp(-HEURISTIC_BOUND, HEURISTIC_BOUND)
}
