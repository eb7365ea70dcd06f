//! Game layer for Imperium.
//!
//! Implements the complete rules of the territory game:
//! - Square grid of cells with faction ownership and adjacency
//! - Gold and army economy (recruiting, expansion, per-turn income)
//! - Battle resolution over contested cells
//! - Player command dispatch and the scripted opponent policy
//! - Turn sequencing, win detection, and snapshots for presentation

mod actions;
mod battle;
mod config;
mod economy;
mod faction;
mod grid;
mod invariants;
mod opponent;
mod state;

pub use actions::{apply_command, Command};
pub use battle::{resolve_battle, resolve_battle_with_strengths, Outcome, Strengths};
pub use config::GameConfig;
pub use economy::{expand, recruit, turn_income};
pub use faction::{Faction, Resources};
pub use grid::{Coord, Grid};
pub use invariants::{
    assert_invariants, check_invariants, InvariantViolation, MIN_GRID_SIZE,
};
pub use opponent::{
    decide_opponent_action, OpponentAction, EXPAND_THRESHOLD, RECRUIT_THRESHOLD,
};
pub use state::{GameState, Snapshot, TargetMode, Turn};
