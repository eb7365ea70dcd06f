//! Player command dispatch.
//!
//! Commands arrive from presentation layers (TUI key presses, scripted
//! drivers) and are applied atomically: a command either changes the state
//! and the status message, changes only the message, or does nothing.

use rand::Rng;

use crate::game::{
    assert_invariants, expand, recruit, resolve_battle, turn_income, Coord, Faction, GameState,
    Outcome, TargetMode, Turn,
};

/// A player intent issued from a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Recruit one army unit.
    Recruit,
    /// Arm expansion targeting; the next selected cell is the target.
    SelectExpand,
    /// Arm battle targeting; the next selected cell is the target.
    SelectBattle,
    /// Select a cell as the target of the pending mode.
    SelectCell(Coord),
    /// End the player's activation and arm the opponent's.
    EndTurn,
}

/// Apply a player command to the game state.
///
/// Commands are accepted only while the turn marker is [`Turn::Player`];
/// anything issued out of turn is ignored wholesale, including its status
/// message. Failed attempts (insufficient resources, bad targets) leave the
/// game unchanged and update only the status message.
///
/// # Panics
///
/// Panics if a selected cell lies outside the grid. Presentation layers
/// are expected to offer only in-bounds coordinates.
pub fn apply_command(state: &mut GameState, command: Command, rng: &mut impl Rng) {
    if state.turn != Turn::Player {
        return;
    }

    match command {
        Command::Recruit => {
            state.status = if recruit(&mut state.player, &state.config) {
                "Recruited 1 army unit."
            } else {
                "Not enough gold to recruit."
            };
        }
        Command::SelectExpand => state.pending = Some(TargetMode::Expand),
        Command::SelectBattle => state.pending = Some(TargetMode::Battle),
        Command::SelectCell(target) => select_cell(state, target, rng),
        Command::EndTurn => {
            turn_income(&state.grid, &mut state.player, Faction::Player, &state.config);
            state.turn = Turn::Opponent;
            state.status = "AI's turn.";
        }
    }

    assert_invariants(state);
}

/// Resolve a cell selection against the pending target mode.
///
/// The pending mode is consumed whether or not the selection leads
/// anywhere. A selection with no armed mode, or one whose cell does not
/// match the mode (expanding onto an owned cell, battling anything but an
/// opponent cell), falls through silently.
fn select_cell(state: &mut GameState, target: Coord, rng: &mut impl Rng) {
    let mode = state.pending.take();

    match (mode, state.grid.owner(target)) {
        (Some(TargetMode::Expand), None) => {
            if state.grid.is_adjacent_to(target, Faction::Player) {
                let expanded = expand(
                    &mut state.grid,
                    &mut state.player,
                    Faction::Player,
                    target,
                    &state.config,
                );
                state.status = if expanded {
                    "Expanded to a new territory."
                } else {
                    "Not enough resources to expand."
                };
            } else {
                state.status = "You can only expand to adjacent territories.";
            }
        }
        (Some(TargetMode::Battle), Some(Faction::Opponent)) => {
            if state.grid.is_adjacent_to(target, Faction::Player) {
                let outcome = resolve_battle(
                    &mut state.grid,
                    Faction::Player,
                    &mut state.player,
                    &mut state.opponent,
                    target,
                    rng,
                );
                state.status = match outcome {
                    Outcome::Win => "Battle won! Captured enemy territory.",
                    Outcome::Loss => "Battle lost. Lost 1 army unit.",
                    Outcome::Ineligible => "No army units available for battle.",
                };
            } else {
                state.status = "You can only battle adjacent enemy territories.";
            }
        }
        _ => {}
    }

    state.check_victory();
}
