//! Rule parameters for a game.

/// Tunable rule parameters.
///
/// The defaults carry the standard rules: a 5x5 grid, 100 starting gold and
/// 10 starting army units per faction, recruiting at 10 gold, expansion at
/// 50 gold plus 5 army units, and 10 gold income per owned cell per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of the square grid.
    pub grid_size: u16,
    /// Gold each faction starts with.
    pub initial_gold: u32,
    /// Army units each faction starts with.
    pub initial_army: u32,
    /// Gold cost of recruiting one army unit.
    pub recruit_cost: u32,
    /// Gold cost of expanding into an unclaimed cell.
    pub expand_gold_cost: u32,
    /// Army cost of expanding into an unclaimed cell.
    pub expand_army_cost: u32,
    /// Gold granted per owned cell at the end of a faction's turn.
    pub income_per_cell: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            initial_gold: 100,
            initial_army: 10,
            recruit_cost: 10,
            expand_gold_cost: 50,
            expand_army_cost: 5,
            income_per_cell: 10,
        }
    }
}
