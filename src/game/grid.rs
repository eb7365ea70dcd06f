//! Territory grid and adjacency queries.

use crate::game::Faction;

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index (0 at the top).
    pub row: u16,
    /// Column index (0 at the left).
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Get adjacent coordinates (up, down, left, right).
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, size: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.row > 0 {
            result[count as usize] = Coord::new(self.row - 1, self.col); // up
            count += 1;
        }
        if self.row + 1 < size {
            result[count as usize] = Coord::new(self.row + 1, self.col); // down
            count += 1;
        }
        if self.col > 0 {
            result[count as usize] = Coord::new(self.row, self.col - 1); // left
            count += 1;
        }
        if self.col + 1 < size {
            result[count as usize] = Coord::new(self.row, self.col + 1); // right
            count += 1;
        }

        (result, count)
    }
}

/// The territory grid.
///
/// A square of cells stored in row-major order. Each cell is either owned
/// by a faction or unclaimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Edge length in cells.
    size: u16,
    /// Cell owners in row-major order. `None` means unclaimed.
    cells: Vec<Option<Faction>>,
}

impl Grid {
    /// Create a new grid with every cell unclaimed.
    ///
    /// # Errors
    ///
    /// Returns `None` if `size` is zero.
    #[must_use]
    pub fn new(size: u16) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let cells = vec![None; usize::from(size) * usize::from(size)];

        Some(Self { size, cells })
    }

    /// Get the edge length of the grid.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Convert a coordinate to an index into the cells array.
    ///
    /// Coordinates outside the grid are a caller bug, not a game condition.
    fn coord_to_index(&self, coord: Coord) -> usize {
        assert!(
            self.in_bounds(coord),
            "coordinate ({}, {}) out of bounds for {}x{} grid",
            coord.row,
            coord.col,
            self.size,
            self.size
        );
        usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col)
    }

    /// Get the owner of the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<Faction> {
        self.cells[self.coord_to_index(coord)]
    }

    /// Set the owner of the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set_owner(&mut self, coord: Coord, owner: Option<Faction>) {
        let idx = self.coord_to_index(coord);
        self.cells[idx] = owner;
    }

    /// Check whether any orthogonal neighbor of `coord` is owned by `faction`.
    #[must_use]
    pub fn is_adjacent_to(&self, coord: Coord, faction: Faction) -> bool {
        let (neighbors, count) = coord.adjacent(self.size);
        neighbors[..usize::from(count)]
            .iter()
            .any(|&n| self.owner(n) == Some(faction))
    }

    /// Iterate over all coordinates and cell owners.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Faction>)> {
        self.cells.iter().enumerate().map(|(idx, &owner)| {
            let row = (idx / usize::from(self.size)) as u16;
            let col = (idx % usize::from(self.size)) as u16;
            (Coord::new(row, col), owner)
        })
    }

    /// Iterate over all unclaimed cell coordinates.
    pub fn unclaimed_cells(&self) -> impl Iterator<Item = Coord> {
        self.iter()
            .filter(|(_, owner)| owner.is_none())
            .map(|(coord, _)| coord)
    }

    /// Iterate over all cell coordinates owned by a faction.
    pub fn cells_owned_by(&self, faction: Faction) -> impl Iterator<Item = Coord> {
        self.iter()
            .filter(move |(_, owner)| *owner == Some(faction))
            .map(|(coord, _)| coord)
    }

    /// Count cells owned by a faction.
    #[must_use]
    pub fn count_owned(&self, faction: Faction) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(faction)).count() as u32
    }
}
