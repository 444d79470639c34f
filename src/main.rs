//! Teeko -- a Teeko engine speaking a line-based text protocol.
//!
//! By default this binary reads protocol commands from stdin and writes
//! responses to stdout. `teeko play` starts an interactive game against
//! the engine instead.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use teeko::console::{self, GameOutcome};
use teeko::protocol::{parse_command, Command};
use teeko::search::{SearchConfig, DEFAULT_DEPTH, MAX_DEPTH};
use teeko::session::Session;
use teeko::{Engine, Piece};

#[derive(Parser)]
#[command(name = "teeko", version, about)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Play an interactive game against the engine on the console
    Play {
        /// Color the engine plays, "r" or "b" (random if omitted)
        #[arg(long, value_parser = parse_piece)]
        color: Option<Piece>,

        /// Seed for the engine's opening moves
        #[arg(long)]
        seed: Option<u64>,

        /// Search depth in plies
        #[arg(
            long,
            default_value_t = DEFAULT_DEPTH,
            value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64)
        )]
        depth: u32,

        /// Enable alpha-beta pruning
        #[arg(long, default_value_t = false)]
        pruning: bool,
    },
}

fn parse_piece(s: &str) -> Result<Piece, String> {
    Piece::from_name(s).ok_or_else(|| format!("unknown color '{}', expected r or b", s))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    teeko::logging::init(args.log_level);

    match args.mode {
        None => run_protocol(),
        Some(Mode::Play { color, seed, depth, pruning }) => {
            let color = color.unwrap_or_else(|| {
                if rand::random() {
                    Piece::Red
                } else {
                    Piece::Black
                }
            });
            let engine = match seed {
                Some(seed) => Engine::with_seed(color, seed),
                None => Engine::new(color),
            };
            let mut engine = engine.with_config(SearchConfig { depth, pruning });
            run_console(&mut engine)
        }
    }
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn run_protocol() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Tei => session.handle_tei(&mut out)?,
            Command::IsReady => session.handle_isready(&mut out)?,
            Command::SetOption { name, value } => session.set_option(name, value),
            Command::NewGame => session.new_game(),
            Command::Position { board } => session.set_position(board),
            Command::SetColor { piece } => session.set_color(piece),
            Command::Go(params) => session.handle_go(&params, &mut out)?,
            Command::Opponent { mv } => session.handle_opponent(mv, &mut out)?,
            Command::Display => session.handle_display(&mut out)?,
            Command::Quit => break,
        }
    }
    out.flush().context("failed to flush output")
}

fn run_console(engine: &mut Engine) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Hello, this is teeko. I play {}.", engine.color())?;
    let outcome = console::play(engine, stdin.lock(), &mut out).context("console game failed")?;
    if outcome == GameOutcome::Aborted {
        writeln!(out, "Game abandoned.")?;
    }
    Ok(())
}
