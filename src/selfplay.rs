//! Engine-vs-engine self-play.
//!
//! Plays full games between a black and a red engine, each with its own
//! seeded opening RNG, and records every move. The move phase has no
//! natural end, so games stop at `max_plies`. Records serialize to JSONL.

use std::io::{self, Write};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::board::{Board, Piece};
use crate::engine::Engine;
use crate::protocol::encode_position;
use crate::rules::winner;
use crate::search::SearchConfig;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Plies after which an undecided game is abandoned.
    pub max_plies: usize,
    /// Search settings shared by both engines.
    pub search: SearchConfig,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Base random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_plies: 200,
            search: SearchConfig { pruning: true, ..SearchConfig::default() },
            threads: 4,
            seed: 0,
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: u64,
    /// Moves in notation, black first.
    pub moves: Vec<String>,
    /// The winning color, or `None` if the game hit the ply limit.
    pub winner: Option<Piece>,
    pub plies: usize,
    /// Why the game stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped: Option<String>,
    /// Final board in position notation.
    pub final_position: String,
    pub elapsed_ms: u64,
}

/// Aggregate results over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub black_wins: usize,
    pub red_wins: usize,
    pub unfinished: usize,
    pub total_plies: usize,
}

/// Plays a single game from the empty board.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, seed: u64) -> GameRecord {
    let start = Instant::now();
    let mut engines = [
        Engine::with_seed(Piece::Black, seed.wrapping_mul(2)).with_config(config.search),
        Engine::with_seed(Piece::Red, seed.wrapping_mul(2).wrapping_add(1)).with_config(config.search),
    ];
    let mut board = Board::empty();
    let mut moves = Vec::new();
    let mut stopped = None;

    while winner(&board).is_none() && moves.len() < config.max_plies {
        let engine = &mut engines[moves.len() % 2];
        let mv = match engine.choose_move(&board) {
            Ok(mv) => mv,
            Err(e) => {
                info!(game_id, "{} stopped: {}", engine.color(), e);
                stopped = Some(e.to_string());
                break;
            }
        };
        if let Err(e) = engine.apply_own_move(&mut board, mv) {
            warn!(game_id, %mv, "{}", e);
            stopped = Some(e.to_string());
            break;
        }
        moves.push(mv.to_string());
    }

    let record = GameRecord {
        game_id,
        seed,
        plies: moves.len(),
        moves,
        stopped,
        winner: winner(&board),
        final_position: encode_position(&board),
        elapsed_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        game_id,
        winner = ?record.winner,
        plies = record.plies,
        elapsed_ms = record.elapsed_ms,
        "game finished"
    );
    record
}

/// Plays `config.num_games` games, on a rayon pool when `threads > 1`.
///
/// Game `i` is seeded with `base + i`, where `base` is `config.seed` or
/// drawn from entropy when that is 0. Results come back in game order.
pub fn play_games(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, rayon::ThreadPoolBuildError> {
    let base = if config.seed != 0 { config.seed } else { rand::random() };
    let seed_for = |i: usize| base.wrapping_add(i as u64);

    if config.threads <= 1 {
        return Ok((0..config.num_games)
            .map(|i| play_game(config, i, seed_for(i)))
            .collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config, i, seed_for(i)))
            .collect()
    }))
}

/// Tallies wins and lengths over `games`.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary { games: games.len(), ..Summary::default() };
    for game in games {
        match game.winner {
            Some(Piece::Black) => summary.black_wins += 1,
            Some(Piece::Red) => summary.red_wins += 1,
            None => summary.unfinished += 1,
        }
        summary.total_plies += game.plies;
    }
    summary
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}
