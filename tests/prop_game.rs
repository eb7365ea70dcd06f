//! Property-based tests for game mechanics.
//!
//! These tests verify structural invariants of the command surface, battle
//! resolution, and the self-play driver under randomized play.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use imperium::game::{
    apply_command, check_invariants, decide_opponent_action, resolve_battle_with_strengths,
    Command, Coord, Faction, GameConfig, GameState, OpponentAction, Outcome, Snapshot, Strengths,
    Turn, EXPAND_THRESHOLD, RECRUIT_THRESHOLD,
};
use imperium::sim::run_game;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Strategy producing an arbitrary command for a `size` x `size` grid.
fn arb_command(size: u16) -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Recruit),
        Just(Command::SelectExpand),
        Just(Command::SelectBattle),
        (0..size, 0..size).prop_map(|(row, col)| Command::SelectCell(Coord::new(row, col))),
        Just(Command::EndTurn),
    ]
}

/// Apply a command script on a 4x4 grid, running the AI whenever the turn
/// passes to it, and return the final snapshot.
fn replay(seed: u64, commands: &[Command]) -> Snapshot {
    let config = GameConfig {
        grid_size: 4,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);

    for &command in commands {
        apply_command(&mut state, command, &mut rng);
        if state.turn == Turn::Opponent {
            state.run_opponent_turn(&mut rng);
        }
    }

    state.snapshot()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Random command streams never corrupt the state, and claimed cells
    /// never revert to unclaimed.
    #[test]
    fn prop_random_commands_keep_state_valid(
        commands in prop::collection::vec(arb_command(4), 1..40),
        seed in any::<u64>()
    ) {
        let config = GameConfig {
            grid_size: 4,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut owned = 2u32;
        for command in commands {
            apply_command(&mut state, command, &mut rng);
            if state.turn == Turn::Opponent {
                state.run_opponent_turn(&mut rng);
            }

            let now = state.grid.count_owned(Faction::Player)
                + state.grid.count_owned(Faction::Opponent);
            prop_assert!(now >= owned, "claimed cells reverted: {} -> {}", owned, now);
            prop_assert!(now <= state.grid.cell_count(), "over-claimed grid: {}", now);
            owned = now;
        }

        let violations = check_invariants(&state);
        prop_assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }

    /// Clicking a cell always consumes the pending selection, whatever
    /// the mode and target were.
    #[test]
    fn prop_select_cell_clears_pending(
        commands in prop::collection::vec(arb_command(4), 0..20),
        row in 0u16..4,
        col in 0u16..4,
        seed in any::<u64>()
    ) {
        let config = GameConfig {
            grid_size: 4,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);

        for command in commands {
            apply_command(&mut state, command, &mut rng);
            if state.turn == Turn::Opponent {
                state.run_opponent_turn(&mut rng);
            }
        }
        prop_assume!(state.turn == Turn::Player);

        apply_command(&mut state, Command::SelectCell(Coord::new(row, col)), &mut rng);
        prop_assert!(state.pending.is_none(), "pending survived a cell click");
    }

    /// Once the game is over, no command or opponent turn changes anything.
    #[test]
    fn prop_game_over_freezes_state(
        commands in prop::collection::vec(arb_command(2), 0..20),
        seed in any::<u64>()
    ) {
        let config = GameConfig {
            grid_size: 2,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);

        // Hand the whole board to the player
        state.grid.set_owner(Coord::new(0, 1), Some(Faction::Player));
        state.grid.set_owner(Coord::new(1, 0), Some(Faction::Player));
        state.grid.set_owner(Coord::new(1, 1), Some(Faction::Player));
        prop_assert_eq!(state.check_victory(), Some(Faction::Player));

        let frozen = state.snapshot();
        for command in commands {
            apply_command(&mut state, command, &mut rng);
        }
        prop_assert!(!state.run_opponent_turn(&mut rng));
        prop_assert_eq!(state.snapshot(), frozen);
    }

    /// The opponent turn runs exactly once per handoff: the second call is
    /// rejected and leaves the state untouched.
    #[test]
    fn prop_opponent_turn_runs_once(
        commands in prop::collection::vec(arb_command(4), 0..20),
        seed in any::<u64>()
    ) {
        let config = GameConfig {
            grid_size: 4,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);

        for command in commands {
            apply_command(&mut state, command, &mut rng);
            if state.turn == Turn::Opponent {
                state.run_opponent_turn(&mut rng);
            }
        }
        prop_assume!(state.turn == Turn::Player);

        apply_command(&mut state, Command::EndTurn, &mut rng);
        prop_assert_eq!(state.turn, Turn::Opponent);

        prop_assert!(state.run_opponent_turn(&mut rng));
        let after = state.snapshot();
        prop_assert!(!state.run_opponent_turn(&mut rng));
        prop_assert_eq!(state.snapshot(), after);
    }

    /// The same seed and command script always replay to the same snapshot.
    #[test]
    fn prop_same_seed_replays_identically(
        commands in prop::collection::vec(arb_command(4), 0..30),
        seed in any::<u64>()
    ) {
        prop_assert_eq!(replay(seed, &commands), replay(seed, &commands));
    }

    /// Battle outcome follows the strength comparison exactly: strictly
    /// greater attack wins, everything else (ties included) loses.
    #[test]
    fn prop_battle_matches_strength_comparison(
        attack in 0.0f64..1.0,
        defense in 0.0f64..1.0
    ) {
        let config = GameConfig {
            grid_size: 2,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();

        let outcome = resolve_battle_with_strengths(
            &mut state.grid,
            Faction::Player,
            &mut state.player,
            &mut state.opponent,
            Coord::new(1, 1),
            Strengths { attack, defense },
        );

        // An eligible battle always costs the attacker one unit
        prop_assert_eq!(state.player.army, 9);
        if attack > defense {
            prop_assert_eq!(outcome, Outcome::Win);
            prop_assert_eq!(state.grid.owner(Coord::new(1, 1)), Some(Faction::Player));
            prop_assert_eq!(state.opponent.army, 9);
        } else {
            prop_assert_eq!(outcome, Outcome::Loss);
            prop_assert_eq!(state.grid.owner(Coord::new(1, 1)), Some(Faction::Opponent));
            prop_assert_eq!(state.opponent.army, 10);
        }
    }

    /// With every option affordable and available, the AI policy follows
    /// its roll bands exactly.
    #[test]
    fn prop_opponent_policy_follows_bands(roll in 0.0f64..1.0) {
        let state = GameState::new(GameConfig::default()).unwrap();

        let expected = if roll < RECRUIT_THRESHOLD {
            OpponentAction::Recruit
        } else if roll < EXPAND_THRESHOLD {
            OpponentAction::Expand
        } else {
            OpponentAction::Battle
        };

        prop_assert_eq!(decide_opponent_action(&state, roll), expected);
    }

    /// Self-play games stay within the turn cap, and a reported winner
    /// really owns the whole grid.
    #[test]
    fn prop_self_play_winner_owns_grid(seed in any::<u64>()) {
        let config = GameConfig {
            grid_size: 3,
            ..GameConfig::default()
        };
        let result = run_game(seed, &config, 200).unwrap();

        prop_assert!(result.turns_played <= 200);
        prop_assert!(result.player.cells + result.opponent.cells <= 9);

        if let Some(winner) = result.winner {
            let cells = match winner {
                Faction::Player => result.player.cells,
                Faction::Opponent => result.opponent.cells,
            };
            prop_assert_eq!(cells, 9, "winner does not own the grid for seed {}", seed);
        }
    }
}
