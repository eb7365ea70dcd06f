//! Economy system: recruiting, expansion costs, and turn income.
//!
//! All prices come from [`GameConfig`] so variants of the standard rules
//! stay cheap to express. Under the defaults the loop is:
//!
//! - Recruit: 10 gold buys 1 army unit
//! - Expand: 50 gold + 5 army units claims an unclaimed cell
//! - Income: 10 gold per owned cell at the end of each turn
//!
//! Income scales linearly with territory, so early expansion compounds.

use crate::game::{Coord, Faction, GameConfig, Grid, Resources};

/// Attempt to recruit one army unit.
///
/// Deducts the recruit cost and adds one unit. Returns `false` and leaves
/// the resources untouched if the faction cannot afford it.
pub fn recruit(resources: &mut Resources, config: &GameConfig) -> bool {
    if resources.gold < config.recruit_cost {
        return false;
    }

    resources.gold -= config.recruit_cost;
    resources.army = resources.army.saturating_add(1);
    true
}

/// Attempt to expand a faction into an unclaimed cell.
///
/// Checks only the resource preconditions. Callers gate target validity:
/// the cell must be unclaimed, and player expansion additionally requires
/// adjacency. Returns `false` and leaves all state untouched if the faction
/// cannot afford the expansion.
pub fn expand(
    grid: &mut Grid,
    resources: &mut Resources,
    faction: Faction,
    target: Coord,
    config: &GameConfig,
) -> bool {
    debug_assert!(
        grid.owner(target).is_none(),
        "expansion target must be unclaimed"
    );

    if resources.gold < config.expand_gold_cost || resources.army < config.expand_army_cost {
        return false;
    }

    grid.set_owner(target, Some(faction));
    resources.gold -= config.expand_gold_cost;
    resources.army -= config.expand_army_cost;
    true
}

/// Grant end-of-turn income: gold per cell the faction owns.
pub fn turn_income(grid: &Grid, resources: &mut Resources, faction: Faction, config: &GameConfig) {
    let income = config.income_per_cell.saturating_mul(grid.count_owned(faction));
    resources.gold = resources.gold.saturating_add(income);
}

/// Kani formal verification proofs.
///
/// These prove arithmetic safety properties for all possible inputs.
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove that recruiting never underflows gold.
    ///
    /// The affordability guard makes the deduction safe for all inputs.
    #[kani::proof]
    fn prove_recruit_no_underflow() {
        let gold: u32 = kani::any();
        let army: u32 = kani::any();
        let cost: u32 = kani::any();

        let mut resources = Resources::new(gold, army);
        let config = GameConfig {
            recruit_cost: cost,
            ..GameConfig::default()
        };

        let recruited = recruit(&mut resources, &config);

        if recruited {
            assert!(gold >= cost, "Recruiting requires affordability");
            assert_eq!(resources.gold, gold - cost);
        } else {
            assert_eq!(resources.gold, gold, "Failed recruit must not spend");
            assert_eq!(resources.army, army, "Failed recruit must not add units");
        }
    }

    /// Prove that expansion deductions never underflow.
    #[kani::proof]
    fn prove_expand_costs_guarded() {
        let gold: u32 = kani::any();
        let army: u32 = kani::any();
        let gold_cost: u32 = kani::any();
        let army_cost: u32 = kani::any();

        // The guard from expand()
        let affordable = gold >= gold_cost && army >= army_cost;

        if affordable {
            let remaining_gold = gold - gold_cost;
            let remaining_army = army - army_cost;
            assert!(remaining_gold <= gold);
            assert!(remaining_army <= army);
        }
    }

    /// Prove that income never overflows gold.
    ///
    /// Both the multiply and the add saturate.
    #[kani::proof]
    fn prove_income_saturates() {
        let gold: u32 = kani::any();
        let per_cell: u32 = kani::any();
        let cells: u32 = kani::any();

        let income = per_cell.saturating_mul(cells);
        let new_gold = gold.saturating_add(income);

        assert!(new_gold >= gold || new_gold == u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(gold: u32, army: u32) -> (Grid, Resources, GameConfig) {
        let grid = Grid::new(5).unwrap();
        let resources = Resources::new(gold, army);
        (grid, resources, GameConfig::default())
    }

    #[test]
    fn test_recruit_success() {
        let (_, mut resources, config) = setup(100, 10);

        assert!(recruit(&mut resources, &config));
        assert_eq!(resources.gold, 90);
        assert_eq!(resources.army, 11);
    }

    #[test]
    fn test_recruit_exact_gold() {
        let (_, mut resources, config) = setup(10, 0);

        assert!(recruit(&mut resources, &config));
        assert_eq!(resources.gold, 0);
        assert_eq!(resources.army, 1);
    }

    #[test]
    fn test_recruit_insufficient_gold() {
        let (_, mut resources, config) = setup(9, 10);

        assert!(!recruit(&mut resources, &config));
        assert_eq!(resources.gold, 9);
        assert_eq!(resources.army, 10);
    }

    #[test]
    fn test_expand_success() {
        let (mut grid, mut resources, config) = setup(100, 10);
        let target = Coord::new(0, 1);

        assert!(expand(&mut grid, &mut resources, Faction::Player, target, &config));
        assert_eq!(grid.owner(target), Some(Faction::Player));
        assert_eq!(resources.gold, 50);
        assert_eq!(resources.army, 5);
    }

    #[test]
    fn test_expand_insufficient_gold() {
        let (mut grid, mut resources, config) = setup(49, 10);
        let target = Coord::new(0, 1);

        assert!(!expand(&mut grid, &mut resources, Faction::Player, target, &config));
        assert_eq!(grid.owner(target), None);
        assert_eq!(resources.gold, 49);
        assert_eq!(resources.army, 10);
    }

    #[test]
    fn test_expand_insufficient_army() {
        let (mut grid, mut resources, config) = setup(100, 4);
        let target = Coord::new(0, 1);

        assert!(!expand(&mut grid, &mut resources, Faction::Player, target, &config));
        assert_eq!(grid.owner(target), None);
        assert_eq!(resources.gold, 100);
        assert_eq!(resources.army, 4);
    }

    #[test]
    fn test_income_scales_with_territory() {
        let (mut grid, mut resources, config) = setup(0, 0);
        grid.set_owner(Coord::new(0, 0), Some(Faction::Player));
        grid.set_owner(Coord::new(0, 1), Some(Faction::Player));
        grid.set_owner(Coord::new(4, 4), Some(Faction::Opponent));

        turn_income(&grid, &mut resources, Faction::Player, &config);
        assert_eq!(resources.gold, 20);
    }

    #[test]
    fn test_income_zero_territory() {
        let (grid, mut resources, config) = setup(100, 0);

        turn_income(&grid, &mut resources, Faction::Player, &config);
        assert_eq!(resources.gold, 100);
    }

    #[test]
    fn test_income_saturates_at_max() {
        let (mut grid, mut resources, config) = setup(u32::MAX - 5, 0);
        grid.set_owner(Coord::new(0, 0), Some(Faction::Player));

        turn_income(&grid, &mut resources, Faction::Player, &config);
        assert_eq!(resources.gold, u32::MAX);
    }
}
