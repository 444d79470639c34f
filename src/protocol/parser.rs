//! Protocol command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the main loop can dispatch on.

use tracing::warn;

use crate::board::{Board, Move, Piece};

use super::notation::{parse_move, parse_position};

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Tei,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset to an empty board with no engine color.
    NewGame,

    /// Replace the board: `position <rows>`.
    Position { board: Board },

    /// Bind the engine to a color: `setcolor r|b`.
    SetColor { piece: Piece },

    /// Search and play a move for the engine's color.
    Go(GoParams),

    /// Apply a move made by the opponent: `opponent <move>`.
    Opponent { mv: Move },

    /// Print the board.
    Display,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "tei" => Some(Command::Tei),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "d" => Some(Command::Display),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(args),
        "position" => parse_position_cmd(args),
        "setcolor" => parse_setcolor(args),
        "go" => Some(Command::Go(parse_go(args))),
        "opponent" => parse_opponent(args),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(args: &[&str]) -> Option<Command> {
    if args.len() < 2 || args[0] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }
    let rest = &args[1..];
    let (name_parts, value_parts) = match rest.iter().position(|&t| t == "value") {
        Some(vi) => (&rest[..vi], Some(&rest[vi + 1..])),
        None => (rest, None),
    };
    if name_parts.is_empty() {
        warn!("malformed setoption: empty name");
        return None;
    }
    let value = value_parts
        .filter(|parts| !parts.is_empty())
        .map(|parts| parts.join(" "));
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `position <rows>`.
fn parse_position_cmd(args: &[&str]) -> Option<Command> {
    let Some(text) = args.first() else {
        warn!("malformed position: expected 'position <rows>'");
        return None;
    };
    match parse_position(text) {
        Ok(board) => Some(Command::Position { board }),
        Err(e) => {
            warn!("invalid position '{}': {}", text, e);
            None
        }
    }
}

/// Parses `setcolor <r|b>`.
fn parse_setcolor(args: &[&str]) -> Option<Command> {
    let Some(name) = args.first() else {
        warn!("malformed setcolor: expected 'setcolor <r|b>'");
        return None;
    };
    match Piece::from_name(name) {
        Some(piece) => Some(Command::SetColor { piece }),
        None => {
            warn!("unknown color: '{}'", name);
            None
        }
    }
}

/// Parses `go [depth <n>]`.
fn parse_go(args: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "depth" => {
                i += 1;
                match args.get(i).map(|v| v.parse::<u32>()) {
                    Some(Ok(v)) => params.depth = Some(v),
                    Some(Err(_)) => warn!("invalid depth value: '{}'", args[i]),
                    None => warn!("missing depth value"),
                }
            }
            other => warn!("unknown go parameter: '{}'", other),
        }
        i += 1;
    }
    params
}

/// Parses `opponent <move>`.
fn parse_opponent(args: &[&str]) -> Option<Command> {
    let Some(text) = args.first() else {
        warn!("malformed opponent: expected 'opponent <move>'");
        return None;
    };
    match parse_move(text) {
        Ok(mv) => Some(Command::Opponent { mv }),
        Err(e) => {
            warn!("invalid move '{}': {}", text, e);
            None
        }
    }
}
