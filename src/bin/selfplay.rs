//! Self-play game generation CLI.
//!
//! Plays Teeko games engine against engine and writes one JSON record per
//! game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use teeko::search::{SearchConfig, DEFAULT_DEPTH, MAX_DEPTH};
use teeko::selfplay::{self, SelfPlayConfig};

#[derive(Parser)]
#[command(name = "selfplay", about = "Play Teeko engine-vs-engine games")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Plies after which an undecided game is abandoned
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Search depth in plies
    #[arg(
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64)
    )]
    depth: u32,

    /// Disable alpha-beta pruning
    #[arg(long, default_value_t = false)]
    no_pruning: bool,

    /// Number of parallel threads
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    teeko::logging::init(args.log_level);

    let config = SelfPlayConfig {
        num_games: args.games,
        max_plies: args.max_plies,
        search: SearchConfig {
            depth: args.depth,
            pruning: !args.no_pruning,
        },
        threads: args.threads,
        seed: args.seed,
    };

    let start = Instant::now();
    let games = selfplay::play_games(&config).context("failed to build thread pool")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    selfplay::write_jsonl(&games, &mut out).context("failed to write game records")?;

    let summary = selfplay::summarize(&games);
    tracing::info!(
        games = summary.games,
        black_wins = summary.black_wins,
        red_wins = summary.red_wins,
        unfinished = summary.unfinished,
        total_plies = summary.total_plies,
        elapsed_s = start.elapsed().as_secs_f64(),
        "self-play finished"
    );
    Ok(())
}
