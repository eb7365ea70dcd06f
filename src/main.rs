//! Imperium CLI - play, simulate, and analyze territory conquest games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Imperium - a two-faction turn-based territory conquest game
#[derive(Parser, Debug)]
#[command(name = "imperium")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Grid size in cells per side (default: 5)
        #[arg(short, long, default_value = "5")]
        grid_size: u16,

        /// Starting gold for both factions (default: 100)
        #[arg(long, default_value = "100")]
        gold: u32,

        /// Starting army for both factions (default: 10)
        #[arg(long, default_value = "10")]
        army: u32,

        /// AI thinking delay in milliseconds (default: 1000)
        #[arg(long, default_value = "1000")]
        ai_delay: u64,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a single scripted self-play game
    Run {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Grid size in cells per side (default: 5)
        #[arg(short, long, default_value = "5")]
        grid_size: u16,

        /// Maximum full turns before calling the game a draw (default: 1000)
        #[arg(short, long, default_value = "1000")]
        max_turns: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run mass parallel games and aggregate statistics
    Tournament {
        /// Number of games to run (default: 1000)
        #[arg(short = 'n', long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Grid size in cells per side (default: 5)
        #[arg(short, long, default_value = "5")]
        grid_size: u16,

        /// Maximum full turns per game (default: 1000)
        #[arg(short, long, default_value = "1000")]
        max_turns: u32,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::TournamentFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            grid_size,
            gold,
            army,
            ai_delay,
            seed,
        } => cli::play::execute(grid_size, gold, army, ai_delay, seed),

        Commands::Run {
            seed,
            grid_size,
            max_turns,
            format,
        } => cli::run::execute(seed, grid_size, max_turns, format),

        Commands::Tournament {
            games,
            seed,
            grid_size,
            max_turns,
            threads,
            format,
            progress,
        } => cli::tournament::execute(games, seed, grid_size, max_turns, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
