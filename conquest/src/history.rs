// history.rs - Settle detection over recent grid hashes

use crate::config::HISTORY_LEN;
use crate::grid::Grid;

/// Ring of the last few grid hashes. A repeat means the run reached a fixed
/// point or a short cycle.
#[derive(Debug, Clone, Default)]
pub struct SettleHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
    settled: bool,
}

impl SettleHistory {
    /// Record the grid after a tick; returns true when it repeats a recent grid.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = grid.hash_grid();
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            self.settled = true;
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn test_fixed_point_settles_on_second_record() {
        let grid = Grid::filled(3, 3, CellState::Wall);
        let mut history = SettleHistory::default();
        assert!(!history.record(&grid));
        assert!(history.record(&grid));
        assert!(history.is_settled());
    }

    #[test]
    fn test_distinct_grids_do_not_settle() {
        let mut history = SettleHistory::default();
        let mut grid = Grid::new(4, 4);
        for (i, state) in CellState::ALL.into_iter().enumerate() {
            grid.set(i % 4, i / 4, state).unwrap();
            assert!(!history.record(&grid));
        }
        assert!(!history.is_settled());
    }

    #[test]
    fn test_old_hashes_fall_out() {
        let mut history = SettleHistory::default();
        let first = Grid::new(1, 1);
        history.record(&first);
        for width in 2..=(HISTORY_LEN + 1) {
            assert!(!history.record(&Grid::new(width, 1)));
        }
        // the first grid was overwritten by the ring
        assert!(!history.record(&first));
    }

    #[test]
    fn test_clear_resets() {
        let grid = Grid::new(2, 2);
        let mut history = SettleHistory::default();
        history.record(&grid);
        history.record(&grid);
        history.clear();
        assert!(!history.is_settled());
        assert!(!history.record(&grid));
    }
}
