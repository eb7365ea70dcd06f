//! Game invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented game. If they do,
//! it indicates a bug in turn sequencing or win detection, not a gameplay
//! condition.

use crate::game::{Faction, GameState, Turn};

/// Smallest grid that can seat two distinct corner capitals.
pub const MIN_GRID_SIZE: u16 = 2;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// These are bug detectors, not gameplay limits.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if state.grid.size() < MIN_GRID_SIZE {
        violations.push(InvariantViolation {
            message: format!(
                "Grid size {} cannot seat two corner capitals (min {})",
                state.grid.size(),
                MIN_GRID_SIZE
            ),
        });
    }

    let total = state.grid.cell_count();

    // Conquest and the game-over marker must agree in both directions.
    for faction in [Faction::Player, Faction::Opponent] {
        if state.grid.count_owned(faction) == total && state.turn != Turn::GameOver {
            violations.push(InvariantViolation {
                message: format!("{faction:?} owns the whole grid but the game is not over"),
            });
        }
    }

    if state.turn == Turn::GameOver
        && state.grid.count_owned(Faction::Player) != total
        && state.grid.count_owned(Faction::Opponent) != total
    {
        violations.push(InvariantViolation {
            message: "Game marked over but no faction owns the whole grid".to_string(),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
