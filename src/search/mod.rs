//! Search and move selection.
//!
//! Bounded minimax over the successor generator, terminal detector and
//! heuristic evaluator.

pub mod minimax;

pub use minimax::{search, SearchConfig, SearchResult, SearchStats, DEFAULT_DEPTH, MAX_DEPTH};
