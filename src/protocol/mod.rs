//! Text protocol handling.
//!
//! Notation for coordinates, moves and whole positions, and the line-based
//! command parser for the engine's main loop.

pub mod notation;
pub mod parser;

pub use notation::{
    encode_position, format_move, parse_coord, parse_move, parse_position, NotationError,
};
pub use parser::{parse_command, Command, GoParams};
