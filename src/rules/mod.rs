//! Game rules: win detection and move application.

pub mod apply;
pub mod win;

pub use apply::{apply_opponent_move, place_move, validate_move, with_move};
pub use win::{is_terminal, terminal_value, winner, WIN_PATTERNS};
