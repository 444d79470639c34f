//! Protocol session state.
//!
//! Holds the current board, the engine (once a color is bound) and engine
//! options between protocol commands, and writes protocol responses.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::warn;

use crate::board::{Board, Move, Piece};
use crate::engine::{Engine, EngineError};
use crate::protocol::{encode_position, GoParams};
use crate::search::{SearchConfig, MAX_DEPTH};

/// Holds the mutable state of the engine between commands.
pub struct Session {
    pub position: Board,
    engine: Option<Engine>,
    pub options: HashMap<String, String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty board and no engine color.
    pub fn new() -> Self {
        Session {
            position: Board::empty(),
            engine: None,
            options: HashMap::new(),
        }
    }

    /// The color the engine plays, if one has been set.
    pub fn color(&self) -> Option<Piece> {
        self.engine.as_ref().map(Engine::color)
    }

    /// Resets the board and engine color for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.position = Board::empty();
        self.engine = None;
    }

    pub fn set_position(&mut self, board: Board) {
        self.position = board;
    }

    /// Binds the engine to `piece`, using the current options.
    pub fn set_color(&mut self, piece: Piece) {
        self.engine = Some(self.build_engine(piece));
    }

    fn build_engine(&self, piece: Piece) -> Engine {
        let engine = match self.seed() {
            Some(seed) => Engine::with_seed(piece, seed),
            None => Engine::new(piece),
        };
        engine.with_config(self.search_config())
    }

    /// Stores an engine option and applies it to a bound engine.
    ///
    /// A new `Seed` reseeds a bound engine's opening RNG.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let reseed = name == "Seed";
        self.options.insert(name, value.unwrap_or_default());
        if reseed {
            if let Some(color) = self.color() {
                self.engine = Some(self.build_engine(color));
            }
            return;
        }
        let config = self.search_config();
        if let Some(engine) = self.engine.as_mut() {
            engine.set_config(config);
        }
    }

    /// Search configuration from the `Depth` and `Pruning` options.
    fn search_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        let depth = self
            .options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .map(clamp_depth)
            .unwrap_or(defaults.depth);
        let pruning = self
            .options
            .get("Pruning")
            .map(|v| matches!(v.as_str(), "" | "true" | "on" | "1"))
            .unwrap_or(defaults.pruning);
        SearchConfig { depth, pruning }
    }

    fn seed(&self) -> Option<u64> {
        self.options.get("Seed").and_then(|v| v.parse::<u64>().ok())
    }

    /// Handles the handshake: writes id, options, and `teiok`.
    pub fn handle_tei<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name teeko")?;
        writeln!(out, "id author teeko")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            SearchConfig::default().depth,
            MAX_DEPTH
        )?;
        writeln!(out, "option name Pruning type check default false")?;
        writeln!(out, "option name Seed type spin default 0 min 0 max 18446744073709551615")?;
        writeln!(out, "teiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `go`: searches, plays the move on the held board, and reports it.
    pub fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            warn!("go: no engine color set");
            writeln!(out, "bestmove none")?;
            return out.flush();
        };

        let saved = engine.config();
        engine.set_config(go_config(saved, params));
        let decision = engine.decide(&self.position);
        engine.set_config(saved);

        let decision = match decision {
            Ok(d) => d,
            Err(e) => {
                if e != EngineError::GameOver {
                    warn!("go: {}", e);
                }
                writeln!(out, "bestmove none")?;
                return out.flush();
            }
        };

        if let Some(result) = decision.search {
            writeln!(
                out,
                "info depth {} nodes {} score {:.4} time {}",
                result.stats.max_depth, result.stats.nodes, result.value, result.stats.elapsed_ms
            )?;
        }
        play_and_report(engine, &mut self.position, decision.mv, out)
    }

    /// Handles `opponent <move>`; reports `error <reason>` if the move is rejected.
    pub fn handle_opponent<W: Write>(&mut self, mv: Move, out: &mut W) -> io::Result<()> {
        let Some(engine) = self.engine.as_ref() else {
            warn!("opponent: no engine color set");
            writeln!(out, "error no engine color set")?;
            return out.flush();
        };
        if let Err(e) = engine.apply_opponent_move(&mut self.position, mv) {
            warn!("opponent move {} rejected: {}", mv, e);
            writeln!(out, "error {}", e)?;
            return out.flush();
        }
        Ok(())
    }

    /// Prints the board, its position string, and the result if the game is over.
    pub fn handle_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.position)?;
        writeln!(out, "position {}", encode_position(&self.position))?;
        if let Some(winner) = crate::rules::winner(&self.position) {
            writeln!(out, "winner {}", winner)?;
        }
        out.flush()
    }
}

/// Applies the depth override of a `go` command to `saved`.
fn go_config(saved: SearchConfig, params: &GoParams) -> SearchConfig {
    match params.depth {
        Some(depth) => SearchConfig { depth: clamp_depth(depth), ..saved },
        None => saved,
    }
}

/// Bounds a requested search depth to `1..=MAX_DEPTH`.
fn clamp_depth(depth: u32) -> u32 {
    let clamped = depth.clamp(1, MAX_DEPTH);
    if clamped != depth {
        warn!(depth, clamped, "search depth out of range");
    }
    clamped
}

/// Plays the engine's move on `position` and reports it, or reports
/// `bestmove none` if the move does not apply.
fn play_and_report<W: Write>(
    engine: &Engine,
    position: &mut Board,
    mv: Move,
    out: &mut W,
) -> io::Result<()> {
    match engine.apply_own_move(position, mv) {
        Ok(()) => writeln!(out, "bestmove {}", mv)?,
        Err(e) => {
            warn!("go: chosen move {} does not apply: {}", mv, e);
            writeln!(out, "bestmove none")?;
        }
    }
    out.flush()
}
