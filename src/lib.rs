//! Teeko engine library.
//!
//! Exposes the board representation, rules, move generation, evaluation,
//! search, and protocol modules for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod console;
pub mod engine;
pub mod eval;
pub mod logging;
pub mod movegen;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod session;

#[cfg(test)]
mod arbitrary;

pub use board::{Board, Coord, Move, MoveError, Phase, Piece};
pub use engine::{Decision, Engine, EngineError};
