// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Imperium: a two-faction turn-based territory conquest game.
//!
//! This crate provides the complete game core plus headless self-play:
//! - Seedable, bit-exact deterministic games
//! - A command surface that presentation layers drive
//! - A scripted opponent with a fixed decision policy
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Presentation (TUI, headless sim)   │
//! ├─────────────────────────────────────┤
//! │   Commands in  /  snapshots out     │
//! ├─────────────────────────────────────┤
//! │  Game core (grid, economy, turns)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The core never talks to a terminal or a clock. Drivers feed it
//! [`Command`]s and an RNG; everything else is a pure consequence.

pub mod game;
pub mod sim;

// Re-export key game types at crate root for convenience
pub use game::{
    apply_command, Command, Coord, Faction, GameConfig, GameState, Grid, Snapshot, Turn,
};
