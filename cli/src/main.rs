use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexalchemy_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use web_time::Instant;

mod config;

#[derive(Parser, Debug)]
#[command(name = "hexalchemy", version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a hard board and print it
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,

        /// Print a JSON report instead of the text layout
        #[arg(long)]
        json: bool,
    },
    /// Generate a hard board and count how often random play clears it
    Playout {
        #[command(flatten)]
        opts: GenerateOpts,

        /// Independent random games to play
        #[arg(short, long, default_value_t = 1000)]
        games: u32,
    },
    /// List the built-in silhouettes
    Silhouettes {
        /// Print every layout too
        #[arg(long)]
        show: bool,
    },
}

#[derive(clap::Args, Debug)]
struct GenerateOpts {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random playouts per candidate board
    #[arg(long)]
    trials: Option<u32>,

    /// Minimum share of lost playouts for a board to be accepted
    #[arg(long)]
    threshold: Option<f64>,

    /// Candidate boards to try before giving up
    #[arg(long, conflicts_with = "unbounded")]
    max_attempts: Option<u32>,

    /// Keep generating candidates until one is accepted
    #[arg(long)]
    unbounded: bool,
}

impl GenerateOpts {
    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    fn generator_config(&self) -> Result<GeneratorConfig> {
        let base = config::load(self.config.as_deref())?;
        let mut config = GeneratorConfig::new(
            self.trials.unwrap_or(base.trials),
            self.threshold.unwrap_or(base.threshold),
        );
        config.max_attempts = if self.unbounded {
            None
        } else {
            self.max_attempts.or(base.max_attempts)
        };
        config.max_fill_retries = base.max_fill_retries;
        Ok(config)
    }

    fn accept_board(&self) -> Result<(u64, AcceptedPuzzle)> {
        let seed = self.seed();
        let config = self.generator_config()?;
        log::debug!("seed: {seed}, config: {config:?}");

        let start = Instant::now();
        let accepted = HardPuzzleGenerator::new(seed, config)
            .generate_hard()
            .with_context(|| format!("Could not generate a board for seed {seed}"))?;
        log::info!(
            "Generated in {:?} after {} candidates",
            start.elapsed(),
            accepted.attempts
        );

        Ok((seed, accepted))
    }
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    seed: u64,
    attempts: u32,
    difficulty: f64,
    layout: String,
    board: &'a Board,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose.log_level_filter())?;

    match args.command {
        Command::Generate { opts, json } => generate(&opts, json),
        Command::Playout { opts, games } => playout(&opts, games),
        Command::Silhouettes { show } => list_silhouettes(show),
    }
}

fn init_logger(level: log::LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .try_init()
        .context("Error initializing logger")
}

fn generate(opts: &GenerateOpts, json: bool) -> Result<()> {
    let (seed, accepted) = opts.accept_board()?;

    if json {
        let report = GenerateReport {
            seed,
            attempts: accepted.attempts,
            difficulty: accepted.difficulty,
            layout: accepted.board.to_string(),
            board: &accepted.board,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("seed: {seed}");
        println!(
            "difficulty: {:.3} ({} candidates)",
            accepted.difficulty, accepted.attempts
        );
        println!();
        print!("{}", accepted.board);
    }

    Ok(())
}

fn playout(opts: &GenerateOpts, games: u32) -> Result<()> {
    let (seed, accepted) = opts.accept_board()?;

    let mut rng = SmallRng::seed_from_u64(playout_seed(seed));
    let stats = sample_playouts(&accepted.board, games, &mut rng);

    println!("seed: {seed}");
    println!("games: {}", stats.games);
    println!("wins: {}", stats.wins);
    println!("win rate: {:.4}", stats.win_rate());

    Ok(())
}

fn list_silhouettes(show: bool) -> Result<()> {
    for silhouette in SILHOUETTES {
        let cells = silhouette
            .cells(false)
            .with_context(|| format!("Broken silhouette {}", silhouette.slug))?;
        println!("{} ({} cells)", silhouette.slug, cells.len());

        if show {
            for row in silhouette.rows {
                println!("  {row}");
            }
            println!();
        }
    }

    Ok(())
}
