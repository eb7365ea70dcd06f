//! Faction identities and per-faction resources.

/// One of the two sides contesting the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    /// The human-controlled faction.
    Player,
    /// The scripted opposing faction.
    Opponent,
}

impl Faction {
    /// Get the opposing faction.
    #[must_use]
    pub const fn enemy(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Spendable resources held by one faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resources {
    /// Gold available for recruiting and expansion.
    pub gold: u32,
    /// Army units available for expansion and battle.
    pub army: u32,
}

impl Resources {
    /// Create a new resource pool.
    #[must_use]
    pub const fn new(gold: u32, army: u32) -> Self {
        Self { gold, army }
    }
}
