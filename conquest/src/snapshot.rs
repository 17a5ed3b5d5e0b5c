// snapshot.rs - Per-tick adjacency snapshot
//
// The snapshot is taken from the grid before any cell of the tick is updated,
// so every transition within one tick sees the same neighborhood.

use crate::cell::CellState;
use crate::grid::Grid;

/// Set of colors present around a cell, one bit per color.
///
/// Empty and Wall are never members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const EMPTY: ColorSet = ColorSet(0);
    /// Number of distinct sets (5 colors, 5 bits).
    pub const COUNT: usize = 32;

    const fn bit(state: CellState) -> u8 {
        match state {
            CellState::Empty | CellState::Wall => 0,
            CellState::Red => 1 << 0,
            CellState::Blue => 1 << 1,
            CellState::Yellow => 1 << 2,
            CellState::Green => 1 << 3,
            CellState::Purple => 1 << 4,
        }
    }

    pub const fn from_bits(bits: u8) -> ColorSet {
        ColorSet(bits & 0b1_1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Adds `state` if it is a color; Empty and Wall are ignored.
    #[must_use]
    pub const fn with(self, state: CellState) -> ColorSet {
        ColorSet(self.0 | Self::bit(state))
    }

    pub const fn contains(self, state: CellState) -> bool {
        let bit = Self::bit(state);
        bit != 0 && self.0 & bit != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<CellState> for ColorSet {
    fn from_iter<I: IntoIterator<Item = CellState>>(iter: I) -> Self {
        iter.into_iter().fold(ColorSet::EMPTY, ColorSet::with)
    }
}

/// Neighbor colors for every cell of a grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencySnapshot {
    width: usize,
    sets: Vec<ColorSet>,
}

impl AdjacencySnapshot {
    pub fn capture(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut sets = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                sets.push(grid.neighbors(x, y).into_iter().collect());
            }
        }
        Self { width, sets }
    }

    /// Colors around (x, y); callers guarantee the coordinates are in range.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> ColorSet {
        self.sets[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_set_ignores_empty_and_wall() {
        let set: ColorSet = [CellState::Empty, CellState::Wall].into_iter().collect();
        assert!(set.is_empty());
        assert!(!set.contains(CellState::Wall));
    }

    #[test]
    fn test_color_set_membership() {
        let set = ColorSet::EMPTY.with(CellState::Red).with(CellState::Purple);
        assert!(set.contains(CellState::Red));
        assert!(set.contains(CellState::Purple));
        assert!(!set.contains(CellState::Blue));
        assert_eq!(set.bits(), 0b1_0001);
        assert_eq!(ColorSet::from_bits(0xFF).bits(), 0b1_1111);
    }

    #[test]
    fn test_capture_sees_wrapped_neighbors() {
        let grid = Grid::from_rows(&["R..", "...", "..B"]).unwrap();
        let snapshot = AdjacencySnapshot::capture(&grid);

        // (2, 0) wraps right onto (0, 0) and up onto (2, 2)
        let set = snapshot.at(2, 0);
        assert!(set.contains(CellState::Red));
        assert!(set.contains(CellState::Blue));

        // a cell never sees itself on a 3x3 grid
        assert!(!snapshot.at(0, 0).contains(CellState::Red));
        assert!(snapshot.at(1, 1).is_empty());
    }
}
