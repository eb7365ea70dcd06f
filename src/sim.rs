//! Headless self-play: drives both factions of a seeded game.
//!
//! The scripted player mirrors the opponent's threshold policy but keeps
//! the player-side rules, so expansion and battle targets must be adjacent
//! to player territory. Every move goes through the public command surface;
//! nothing here touches state the TUI could not.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::game::{
    apply_command, Command, Coord, Faction, GameConfig, GameState, Snapshot, Turn,
    EXPAND_THRESHOLD, RECRUIT_THRESHOLD,
};

/// Final per-faction figures for a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactionStats {
    /// Cells owned at the end.
    pub cells: u32,
    /// Gold at the end.
    pub gold: u32,
    /// Army units at the end.
    pub army: u32,
}

/// Result of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    /// Seed the game was played from.
    pub seed: u64,
    /// Winner, or `None` if the turn cap was reached first.
    pub winner: Option<Faction>,
    /// Full turns played (one player and one opponent activation each).
    pub turns_played: u32,
    /// Player figures at the end.
    pub player: FactionStats,
    /// Opponent figures at the end.
    pub opponent: FactionStats,
    /// Final state for rendering.
    pub final_state: Snapshot,
}

/// Play one scripted game from a seed.
///
/// Runs until a faction conquers the grid or `max_turns` full turns pass.
/// The same seed and config always produce the same result.
///
/// Returns `None` if `config` cannot produce a valid game (grid smaller
/// than 2).
#[must_use]
pub fn run_game(seed: u64, config: &GameConfig, max_turns: u32) -> Option<SimResult> {
    let mut state = GameState::new(*config)?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut turns_played = 0;
    for _ in 0..max_turns {
        scripted_player_turn(&mut state, &mut rng);
        state.run_opponent_turn(&mut rng);
        turns_played += 1;

        if state.turn == Turn::GameOver {
            break;
        }
    }

    Some(SimResult {
        seed,
        winner: state.winner(),
        turns_played,
        player: faction_stats(&state, Faction::Player),
        opponent: faction_stats(&state, Faction::Opponent),
        final_state: state.snapshot(),
    })
}

/// One player activation under the scripted policy.
///
/// Rolls against the opponent's thresholds, aims at a uniformly chosen
/// legal target, and always hands the turn over at the end. Bands with no
/// legal target skip the action rather than retrying.
fn scripted_player_turn(state: &mut GameState, rng: &mut impl Rng) {
    let roll = rng.gen_range(0.0..1.0);

    if roll < RECRUIT_THRESHOLD {
        apply_command(state, Command::Recruit, rng);
    } else if roll < EXPAND_THRESHOLD {
        let targets: Vec<Coord> = state
            .grid
            .unclaimed_cells()
            .filter(|&coord| state.grid.is_adjacent_to(coord, Faction::Player))
            .collect();
        if !targets.is_empty() {
            let target = targets[rng.gen_range(0..targets.len())];
            apply_command(state, Command::SelectExpand, rng);
            apply_command(state, Command::SelectCell(target), rng);
        }
    } else {
        let targets: Vec<Coord> = state
            .grid
            .cells_owned_by(Faction::Opponent)
            .filter(|&coord| state.grid.is_adjacent_to(coord, Faction::Player))
            .collect();
        if !targets.is_empty() {
            let target = targets[rng.gen_range(0..targets.len())];
            apply_command(state, Command::SelectBattle, rng);
            apply_command(state, Command::SelectCell(target), rng);
        }
    }

    apply_command(state, Command::EndTurn, rng);
}

fn faction_stats(state: &GameState, faction: Faction) -> FactionStats {
    let resources = state.resources(faction);
    FactionStats {
        cells: state.grid.count_owned(faction),
        gold: resources.gold,
        army: resources.army,
    }
}
