//! Board representation and game-state types.
//!
//! Contains piece colors, coordinates, the 5x5 board, and move
//! descriptors.

pub mod moves;
pub mod piece;
pub mod state;

pub use moves::{Move, MoveError};
pub use piece::{Coord, Piece, ALL_PIECES, BOARD_SIZE, CELL_COUNT, PIECES_PER_PLAYER};
pub use state::{Board, Phase, MOVE_PHASE_PIECES};
