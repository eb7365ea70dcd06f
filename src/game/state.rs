//! Game state: turn sequencing, win detection, and the snapshot surface.

use rand::Rng;

use crate::game::{opponent, Coord, Faction, GameConfig, Grid, Resources};

/// Whose activation it is, or whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The player may issue commands.
    Player,
    /// The opponent's activation is armed and has not run yet.
    Opponent,
    /// A faction owns the whole grid; no further mutation is accepted.
    GameOver,
}

/// What the player's next cell selection will attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// The next selected cell is an expansion target.
    Expand,
    /// The next selected cell is a battle target.
    Battle,
}

/// Complete game state.
///
/// All gameplay mutation goes through [`apply_command`] and
/// [`GameState::run_opponent_turn`]; the fields are public for
/// presentation layers and tests.
///
/// [`apply_command`]: crate::game::apply_command
#[derive(Debug, Clone)]
pub struct GameState {
    /// The territory grid.
    pub grid: Grid,
    /// The player faction's resources.
    pub player: Resources,
    /// The opponent faction's resources.
    pub opponent: Resources,
    /// Turn marker; the sole gate on which actor may mutate state.
    pub turn: Turn,
    /// Pending target mode for the player's next cell selection.
    pub pending: Option<TargetMode>,
    /// Human-readable description of the most recent outcome.
    pub status: &'static str,
    /// Rule parameters the game was created with.
    pub config: GameConfig,
}

impl GameState {
    /// Create a new game.
    ///
    /// Seats the player's capital at the top-left corner and the opponent's
    /// at the bottom-right, leaves every other cell unclaimed, and gives
    /// both factions their starting resources.
    ///
    /// # Errors
    ///
    /// Returns `None` if the grid cannot seat two distinct corner capitals
    /// (size smaller than 2).
    #[must_use]
    pub fn new(config: GameConfig) -> Option<Self> {
        if config.grid_size < 2 {
            return None;
        }

        let mut grid = Grid::new(config.grid_size)?;
        let far = config.grid_size - 1;
        grid.set_owner(Coord::new(0, 0), Some(Faction::Player));
        grid.set_owner(Coord::new(far, far), Some(Faction::Opponent));

        Some(Self {
            grid,
            player: Resources::new(config.initial_gold, config.initial_army),
            opponent: Resources::new(config.initial_gold, config.initial_army),
            turn: Turn::Player,
            pending: None,
            status: "Welcome to Empire Tactics!",
            config,
        })
    }

    /// Get the resources of a faction.
    #[must_use]
    pub const fn resources(&self, faction: Faction) -> Resources {
        match faction {
            Faction::Player => self.player,
            Faction::Opponent => self.opponent,
        }
    }

    /// Check whether a faction owns every cell, and if so end the game.
    ///
    /// On a win the turn marker moves to [`Turn::GameOver`] and the status
    /// carries the victory message. Returns the winning faction, if any.
    pub fn check_victory(&mut self) -> Option<Faction> {
        let total = self.grid.cell_count();

        let winner = if self.grid.count_owned(Faction::Player) == total {
            Some(Faction::Player)
        } else if self.grid.count_owned(Faction::Opponent) == total {
            Some(Faction::Opponent)
        } else {
            None
        };

        if let Some(winner) = winner {
            self.turn = Turn::GameOver;
            self.status = match winner {
                Faction::Player => "Congratulations! You have conquered the entire empire!",
                Faction::Opponent => "Game Over. The AI has conquered the entire empire.",
            };
        }

        winner
    }

    /// Get the winner if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        if self.turn != Turn::GameOver {
            return None;
        }

        let total = self.grid.cell_count();
        if self.grid.count_owned(Faction::Player) == total {
            Some(Faction::Player)
        } else if self.grid.count_owned(Faction::Opponent) == total {
            Some(Faction::Opponent)
        } else {
            None
        }
    }

    /// Run the opponent's activation if one is armed.
    ///
    /// This is the delivery point for a scheduled opponent turn: it acts
    /// only while the turn marker is [`Turn::Opponent`] and reports whether
    /// it ran. Duplicate delivery, delivery after the marker has moved on,
    /// and delivery after the game has ended are all no-ops, so schedulers
    /// never need to cancel anything.
    pub fn run_opponent_turn(&mut self, rng: &mut impl Rng) -> bool {
        if self.turn != Turn::Opponent {
            return false;
        }

        opponent::take_turn(self, rng);
        true
    }

    /// Capture an immutable view of the state for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            player: self.player,
            opponent: self.opponent,
            turn: self.turn,
            pending: self.pending,
            status: self.status,
        }
    }
}

/// Immutable view of a game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The territory grid at the time of capture.
    pub grid: Grid,
    /// Player resources.
    pub player: Resources,
    /// Opponent resources.
    pub opponent: Resources,
    /// Turn marker.
    pub turn: Turn,
    /// Pending target mode.
    pub pending: Option<TargetMode>,
    /// Status message.
    pub status: &'static str,
}
