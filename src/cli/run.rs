//! Run command implementation.

use super::output::{format_game_text, JsonGameResult};
use super::{CliError, OutputFormat};
use imperium::game::GameConfig;
use imperium::sim::run_game;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the grid size is invalid or output fails.
pub(crate) fn execute(
    seed: Option<u64>,
    grid_size: u16,
    max_turns: u32,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = GameConfig {
        grid_size,
        ..GameConfig::default()
    };

    let result = run_game(seed, &config, max_turns)
        .ok_or_else(|| CliError::new("grid size must be at least 2"))?;

    // Output based on format
    match format {
        OutputFormat::Text => {
            print!("{}", format_game_text(&result));
        }
        OutputFormat::Json => {
            let json_result = JsonGameResult::from_result(&result);
            let json = serde_json::to_string_pretty(&json_result)?;
            println!("{json}");
        }
    }

    Ok(())
}
