//! Tournament command implementation.

use super::output::{
    format_tournament_csv, format_tournament_text, JsonTournamentResult, TournamentStats,
};
use super::{CliError, TournamentFormat};
use imperium::game::GameConfig;
use imperium::sim::run_game;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Execute the tournament command.
///
/// # Errors
///
/// Returns an error if the config is invalid or output fails.
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    grid_size: u16,
    max_turns: u32,
    threads: Option<usize>,
    format: TournamentFormat,
    progress: bool,
) -> Result<(), CliError> {
    let config = GameConfig {
        grid_size,
        ..GameConfig::default()
    };

    if grid_size < 2 {
        return Err(CliError::new("grid size must be at least 2"));
    }

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Base seed
    let base_seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Run games in parallel using lock-free fold/reduce pattern
    // Each thread accumulates into its own TournamentStats, then we merge at the end
    let stats = (0..games)
        .into_par_iter()
        .fold(TournamentStats::default, |mut local_stats, i| {
            let game_seed = base_seed.wrapping_add(i);

            if let Some(result) = run_game(game_seed, &config, max_turns) {
                local_stats.add_result(&result);
            }

            local_stats
        })
        .reduce(TournamentStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    // Calculate games per second
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    // Output based on format
    match format {
        TournamentFormat::Text => {
            println!();
            print!("{}", format_tournament_text(&stats));
            println!();
            println!(
                "Duration: {:.2}s ({:.0} games/sec)",
                duration.as_secs_f64(),
                games_per_sec
            );
        }
        TournamentFormat::Json => {
            let json_result = JsonTournamentResult::from_stats(&stats);
            let json = serde_json::to_string_pretty(&json_result)?;
            println!("{json}");
        }
        TournamentFormat::Csv => {
            print!("{}", format_tournament_csv(&stats));
        }
    }

    Ok(())
}
