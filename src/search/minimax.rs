//! Depth-limited minimax.
//!
//! Alternates Max nodes (the searching color to move) and Min nodes (the
//! opponent to move). Terminal boards are scored ±1 at any depth; boards at
//! or beyond the depth cutoff are scored by the heuristic. Among equally
//! good children the earliest generated one wins, because a child only
//! replaces the current best on a strict improvement.
//!
//! The default visits every node inside the depth bound. With
//! `SearchConfig::pruning` set, alpha-beta bounds skip children that can
//! no longer beat the current best. A skipped child's value can never
//! strictly improve on the best so far, so the chosen board and the root
//! value are identical to the exhaustive walk.

use std::time::Instant;

use crate::board::{Board, Piece};
use crate::eval::evaluate;
use crate::movegen::successors;
use crate::rules::terminal_value;

/// Default ply cutoff: depths 0 through 3 expand, depth 4 is scored directly.
pub const DEFAULT_DEPTH: u32 = 4;

/// Deepest cutoff accepted from the protocol and the command line.
pub const MAX_DEPTH: u32 = 8;

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nodes at a depth below this expand; deeper nodes are leaves.
    pub depth: u32,
    /// Enable alpha-beta pruning.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: false,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Deepest node visited.
    pub max_depth: u32,
    pub elapsed_ms: u64,
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Minimax value of the root from the searching color's perspective.
    pub value: f64,
    /// The successor chosen at the root, or `None` when the root is
    /// terminal or has no legal successors.
    pub best: Option<Board>,
    pub stats: SearchStats,
}

struct Searcher {
    me: Piece,
    cutoff: u32,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    fn visit(&mut self, depth: u32) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }

    /// Value of a node that is not expanded: terminal or past the cutoff.
    fn static_value(&self, board: &Board, depth: u32) -> Option<f64> {
        let outcome = terminal_value(board, self.me);
        if outcome != 0 {
            return Some(outcome as f64);
        }
        if depth >= self.cutoff {
            return Some(evaluate(board, self.me));
        }
        None
    }

    fn max_value(&mut self, board: &Board, depth: u32, mut alpha: f64, beta: f64) -> f64 {
        self.visit(depth);
        if let Some(v) = self.static_value(board, depth) {
            return v;
        }
        let children = successors(board, self.me);
        if children.is_empty() {
            return evaluate(board, self.me);
        }

        let mut best = f64::NEG_INFINITY;
        for child in &children {
            let v = self.min_value(child, depth + 1, alpha, beta);
            if v > best {
                best = v;
            }
            if self.pruning {
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
        }
        best
    }

    fn min_value(&mut self, board: &Board, depth: u32, alpha: f64, mut beta: f64) -> f64 {
        self.visit(depth);
        if let Some(v) = self.static_value(board, depth) {
            return v;
        }
        let children = successors(board, self.me.opponent());
        if children.is_empty() {
            return evaluate(board, self.me);
        }

        let mut best = f64::INFINITY;
        for child in &children {
            let v = self.max_value(child, depth + 1, alpha, beta);
            if v < best {
                best = v;
            }
            if self.pruning {
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
        }
        best
    }
}

/// Runs a Max-node search from `board` for `me` and returns the chosen successor.
///
/// The root always expands, so a cutoff of 0 behaves like 1.
pub fn search(board: &Board, me: Piece, config: SearchConfig) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Searcher {
        me,
        cutoff: config.depth.max(1),
        pruning: config.pruning,
        stats: SearchStats::default(),
    };

    searcher.visit(0);
    let outcome = terminal_value(board, me);
    let (value, best) = if outcome != 0 {
        (outcome as f64, None)
    } else {
        let children = successors(board, me);
        if children.is_empty() {
            (evaluate(board, me), None)
        } else {
            let mut best_value = f64::NEG_INFINITY;
            let mut best = None;
            let mut alpha = f64::NEG_INFINITY;
            for child in children {
                let v = searcher.min_value(&child, 1, alpha, f64::INFINITY);
                if v > best_value {
                    best_value = v;
                    best = Some(child);
                }
                if config.pruning {
                    alpha = alpha.max(best_value);
                }
            }
            (best_value, best)
        }
    };

    let mut stats = searcher.stats;
    stats.elapsed_ms = start.elapsed().as_millis() as u64;
    SearchResult { value, best, stats }
}
