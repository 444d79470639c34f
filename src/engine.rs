//! The decision engine.
//!
//! An `Engine` is bound to one color for its whole lifetime. It never owns
//! the board: callers pass the current position into every call and the
//! engine mutates it only through the two explicit move appliers.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::board::{Board, Coord, Move, MoveError, Phase, Piece};
use crate::rules::{self, terminal_value};
use crate::search::{search, SearchConfig, SearchResult};

/// Below this many pieces on the board the engine drops at random in the centre.
pub const OPENING_PIECES: usize = 2;

/// Errors from move selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("the game is already over")]
    GameOver,

    #[error("{0} has no legal move")]
    NoLegalMove(Piece),

    #[error("search produced an unusable successor: {0}")]
    Diff(#[from] MoveError),
}

/// A chosen move together with the search that produced it, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub mv: Move,
    /// `None` when the move came from the random opening rule.
    pub search: Option<SearchResult>,
}

/// Color-bound move selector.
pub struct Engine {
    me: Piece,
    config: SearchConfig,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine for `me` with an entropy-seeded opening RNG.
    pub fn new(me: Piece) -> Self {
        Engine {
            me,
            config: SearchConfig::default(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine whose random opening is reproducible.
    pub fn with_seed(me: Piece, seed: u64) -> Self {
        Engine {
            me,
            config: SearchConfig::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn color(&self) -> Piece {
        self.me
    }

    pub fn opponent(&self) -> Piece {
        self.me.opponent()
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Picks the next move for this engine's color on `board`.
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, EngineError> {
        self.decide(board).map(|d| d.mv)
    }

    /// Like `choose_move`, also returning the search statistics.
    ///
    /// With fewer than two pieces on the board the search is skipped and a
    /// uniformly random empty cell of the central 3x3 is dropped on.
    pub fn decide(&mut self, board: &Board) -> Result<Decision, EngineError> {
        if terminal_value(board, self.me) != 0 {
            return Err(EngineError::GameOver);
        }

        if board.phase() == Phase::Drop && board.piece_count() < OPENING_PIECES {
            if let Some(to) = self.opening_drop(board) {
                trace!(%to, "opening drop");
                return Ok(Decision { mv: Move::Drop { to }, search: None });
            }
        }

        let result = search(board, self.me, self.config);
        let best = result.best.ok_or(EngineError::NoLegalMove(self.me))?;
        let mv = Move::between(board, &best)?;
        debug!(
            color = %self.me,
            %mv,
            value = result.value,
            nodes = result.stats.nodes,
            elapsed_ms = result.stats.elapsed_ms,
            "search finished"
        );
        Ok(Decision { mv, search: Some(result) })
    }

    fn opening_drop(&mut self, board: &Board) -> Option<Coord> {
        let centre: Vec<Coord> = (1..=3)
            .flat_map(|row| (1..=3).filter_map(move |col| Coord::new(row, col)))
            .filter(|&at| board.is_empty_at(at))
            .collect();
        centre.choose(&mut self.rng).copied()
    }

    /// Validates and applies a move made by the opponent.
    ///
    /// The board is left unchanged on error.
    pub fn apply_opponent_move(&self, board: &mut Board, mv: Move) -> Result<(), MoveError> {
        rules::apply_opponent_move(board, mv, self.opponent())
    }

    /// Applies one of this engine's own moves.
    pub fn apply_own_move(&self, board: &mut Board, mv: Move) -> Result<(), MoveError> {
        rules::validate_move(board, mv, self.me)?;
        rules::place_move(board, mv, self.me);
        Ok(())
    }

    /// +1 if this engine's color has won, -1 if the opponent has, else 0.
    pub fn evaluate_terminal(&self, board: &Board) -> i32 {
        terminal_value(board, self.me)
    }
}
