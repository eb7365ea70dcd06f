//! Output formatting utilities for CLI.

use imperium::game::{Coord, Faction, Snapshot};
use imperium::sim::SimResult;
use serde::Serialize;

/// Grid glyph for a cell owner.
fn cell_glyph(owner: Option<Faction>) -> char {
    match owner {
        Some(Faction::Player) => 'P',
        Some(Faction::Opponent) => 'A',
        None => '.',
    }
}

/// Lowercase wire name for a faction.
fn faction_name(faction: Faction) -> &'static str {
    match faction {
        Faction::Player => "player",
        Faction::Opponent => "opponent",
    }
}

/// Render a snapshot's grid as one string per row.
fn grid_rows(snapshot: &Snapshot) -> Vec<String> {
    let size = snapshot.grid.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| cell_glyph(snapshot.grid.owner(Coord::new(row, col))))
                .collect()
        })
        .collect()
}

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winning faction (null if the turn cap was reached).
    pub(super) winner: Option<&'static str>,
    /// Total full turns played.
    pub(super) turns_played: u32,
    /// Player faction figures.
    pub(super) player: JsonFactionStats,
    /// Opponent faction figures.
    pub(super) opponent: JsonFactionStats,
    /// Final grid, one string per row ('P', 'A', or '.').
    pub(super) grid: Vec<String>,
}

/// JSON-serializable per-faction figures.
#[derive(Debug, Serialize)]
pub(super) struct JsonFactionStats {
    /// Cells owned at the end.
    pub(super) cells: u32,
    /// Gold at the end.
    pub(super) gold: u32,
    /// Army units at the end.
    pub(super) army: u32,
}

impl JsonGameResult {
    /// Create from a simulation result.
    pub(super) fn from_result(result: &SimResult) -> Self {
        Self {
            seed: result.seed,
            winner: result.winner.map(faction_name),
            turns_played: result.turns_played,
            player: JsonFactionStats {
                cells: result.player.cells,
                gold: result.player.gold,
                army: result.player.army,
            },
            opponent: JsonFactionStats {
                cells: result.opponent.cells,
                gold: result.opponent.gold,
                army: result.opponent.army,
            },
            grid: grid_rows(&result.final_state),
        }
    }
}

/// Format a game result as human-readable text.
pub(super) fn format_game_text(result: &SimResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {})\n", result.seed));
    match result.winner {
        Some(Faction::Player) => output.push_str("  Winner: Player\n"),
        Some(Faction::Opponent) => output.push_str("  Winner: Opponent\n"),
        None => output.push_str("  Winner: Draw (turn cap reached)\n"),
    }
    output.push_str(&format!("  Turns: {}\n\n", result.turns_played));

    output.push_str(&format!(
        "  Player:   {} cells, {} gold, {} army\n",
        result.player.cells, result.player.gold, result.player.army
    ));
    output.push_str(&format!(
        "  Opponent: {} cells, {} gold, {} army\n\n",
        result.opponent.cells, result.opponent.gold, result.opponent.army
    ));

    for row in grid_rows(&result.final_state) {
        output.push_str("  ");
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Tournament statistics for aggregated results.
#[derive(Debug, Default)]
pub(super) struct TournamentStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games the player faction won.
    pub(super) player_wins: u64,
    /// Games the opponent faction won.
    pub(super) opponent_wins: u64,
    /// Games that hit the turn cap.
    pub(super) draws: u64,
    /// Total turns across all games.
    total_turns: u64,
}

impl TournamentStats {
    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &SimResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);

        match result.winner {
            Some(Faction::Player) => self.player_wins += 1,
            Some(Faction::Opponent) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Merge another accumulator into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.player_wins += other.player_wins;
        self.opponent_wins += other.opponent_wins;
        self.draws += other.draws;
        self.total_turns += other.total_turns;
    }

    /// Get the player faction's win rate (0.0-1.0).
    pub(super) fn player_win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.player_wins as f64 / self.games_played as f64
    }

    /// Get the opponent faction's win rate (0.0-1.0).
    pub(super) fn opponent_win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.opponent_wins as f64 / self.games_played as f64
    }

    /// Get the draw rate (0.0-1.0).
    pub(super) fn draw_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.draws as f64 / self.games_played as f64
    }

    /// Get average game length.
    pub(super) fn avg_turns(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games_played as f64
    }
}

/// JSON-serializable tournament result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentResult {
    /// Total games played.
    games_played: u64,
    /// Player faction wins.
    player_wins: u64,
    /// Opponent faction wins.
    opponent_wins: u64,
    /// Games that hit the turn cap.
    draws: u64,
    /// Player faction win rate (0.0-1.0).
    player_win_rate: f64,
    /// Opponent faction win rate (0.0-1.0).
    opponent_win_rate: f64,
    /// Average game length in turns.
    avg_turns: f64,
}

impl JsonTournamentResult {
    /// Create from accumulated stats.
    pub(super) fn from_stats(stats: &TournamentStats) -> Self {
        Self {
            games_played: stats.games_played,
            player_wins: stats.player_wins,
            opponent_wins: stats.opponent_wins,
            draws: stats.draws,
            player_win_rate: stats.player_win_rate(),
            opponent_win_rate: stats.opponent_win_rate(),
            avg_turns: stats.avg_turns(),
        }
    }
}

/// Format tournament stats as human-readable text.
pub(super) fn format_tournament_text(stats: &TournamentStats) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Tournament Results ({} games)\n",
        stats.games_played
    ));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    output.push_str(&format!(
        "  Player:   {:.1}% ({} wins)\n",
        stats.player_win_rate() * 100.0,
        stats.player_wins
    ));
    output.push_str(&format!(
        "  Opponent: {:.1}% ({} wins)\n",
        stats.opponent_win_rate() * 100.0,
        stats.opponent_wins
    ));
    output.push_str(&format!(
        "  Draws:    {:.1}% ({})\n",
        stats.draw_rate() * 100.0,
        stats.draws
    ));

    output.push_str(&format!(
        "\nAverage Game Length: {:.0} turns\n",
        stats.avg_turns()
    ));

    output
}

/// Format tournament stats as CSV.
pub(super) fn format_tournament_csv(stats: &TournamentStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("faction,wins,win_rate\n");

    // Data rows
    output.push_str(&format!(
        "player,{},{:.4}\n",
        stats.player_wins,
        stats.player_win_rate()
    ));
    output.push_str(&format!(
        "opponent,{},{:.4}\n",
        stats.opponent_wins,
        stats.opponent_win_rate()
    ));
    output.push_str(&format!("draw,{},{:.4}\n", stats.draws, stats.draw_rate()));

    output
}
