//! Position evaluation.
//!
//! Scores a non-terminal board from a given color's perspective.

pub mod heuristic;

pub use heuristic::{cluster_distance, evaluate, HEURISTIC_BOUND};
