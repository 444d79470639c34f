//! Interactive human-vs-engine game on a text console.
//!
//! Black moves first. The board is printed before every turn; human input
//! is re-prompted until it parses and passes validation.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::board::{Board, Move, Phase, Piece};
use crate::engine::Engine;
use crate::protocol::parse_coord;
use crate::rules::winner;

/// How a console game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    EngineWon,
    HumanWon,
    /// Input ran out, or the side to move had no legal move.
    Aborted,
}

/// Plays a full game between `engine` and a human reading from `input`.
pub fn play<R: BufRead, W: Write>(
    engine: &mut Engine,
    mut input: R,
    out: &mut W,
) -> io::Result<GameOutcome> {
    let mut board = Board::empty();
    let mut to_move = Piece::Black;

    while winner(&board).is_none() {
        writeln!(out, "{}", board)?;
        if to_move == engine.color() {
            let mv = match engine.choose_move(&board) {
                Ok(mv) => mv,
                Err(e) => {
                    warn!("engine could not move: {}", e);
                    writeln!(out, "{} cannot move: {}", to_move, e)?;
                    return Ok(GameOutcome::Aborted);
                }
            };
            if let Err(e) = engine.apply_own_move(&mut board, mv) {
                warn!("engine produced an illegal move {}: {}", mv, e);
                return Ok(GameOutcome::Aborted);
            }
            match mv {
                Move::Drop { to } => writeln!(out, "{} moved at {}", to_move, to)?,
                Move::Step { from, to } => {
                    writeln!(out, "{} moved from {}", to_move, from)?;
                    writeln!(out, "  to {}", to)?;
                }
            }
        } else {
            writeln!(out, "{}'s turn", to_move)?;
            loop {
                let Some(mv) = read_human_move(&board, &mut input, out)? else {
                    return Ok(GameOutcome::Aborted);
                };
                match engine.apply_opponent_move(&mut board, mv) {
                    Ok(()) => break,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
        }
        to_move = to_move.opponent();
    }

    writeln!(out, "{}", board)?;
    let outcome = if engine.evaluate_terminal(&board) == 1 {
        writeln!(out, "AI wins! Game over.")?;
        GameOutcome::EngineWon
    } else {
        writeln!(out, "You win! Game over.")?;
        GameOutcome::HumanWon
    };
    info!(?outcome, "game finished");
    Ok(outcome)
}

/// Prompts until a well-formed move is entered. `None` on end of input.
fn read_human_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Move>> {
    match board.phase() {
        Phase::Drop => {
            let Some(to) = prompt_coord("Move (e.g. B3): ", input, out)? else {
                return Ok(None);
            };
            Ok(Some(Move::Drop { to }))
        }
        Phase::Move => {
            let Some(from) = prompt_coord("Move from (e.g. B3): ", input, out)? else {
                return Ok(None);
            };
            let Some(to) = prompt_coord("Move to (e.g. B3): ", input, out)? else {
                return Ok(None);
            };
            if from == to {
                writeln!(out, "Source and destination must differ")?;
                return read_human_move(board, input, out);
            }
            Ok(Some(Move::Step { from, to }))
        }
    }
}

fn prompt_coord<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<crate::board::Coord>> {
    let mut line = String::new();
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Ok(at) = parse_coord(&line) {
            return Ok(Some(at));
        }
    }
}
