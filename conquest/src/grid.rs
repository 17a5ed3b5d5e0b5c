// grid.rs - Toroidal grid of cell states

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::CellState;
use crate::config::MIN_DIMENSION;
use crate::error::{Error, Result};

/// Row-major grid of cell states. Neighbor lookups wrap at every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-Empty grid. Dimensions below 1 are clamped to 1.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, CellState::Empty)
    }

    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        let width = width.max(MIN_DIMENSION);
        let height = height.max(MIN_DIMENSION);
        Self {
            width,
            height,
            cells: vec![state; width * height],
        }
    }

    /// Build a grid from text rows, one glyph per cell (see [`CellState::glyph`]).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len().max(MIN_DIMENSION);
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0)
            .max(MIN_DIMENSION);

        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(Error::RaggedLayout { row: y, expected: width, found });
            }
            for (x, glyph) in row.chars().enumerate() {
                let state = CellState::from_glyph(glyph).ok_or(Error::UnknownGlyph(glyph))?;
                grid.cells[y * width + x] = state;
            }
        }
        Ok(grid)
    }

    /// Build a grid from already-assembled rows. Used when committing a step.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index_of(x, y);
        self.cells[idx] = state;
        Ok(())
    }

    /// Cell at (x, y); callers guarantee the coordinates are in range.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index_of(x, y)]
    }

    /// The 4 orthogonal neighbors (up, left, right, down), wrapping at the edges.
    /// Callers guarantee the coordinates are in range.
    pub(crate) fn neighbors(&self, x: usize, y: usize) -> [CellState; 4] {
        let left = if x == 0 { self.width - 1 } else { x - 1 };
        let right = if x + 1 == self.width { 0 } else { x + 1 };
        let up = if y == 0 { self.height - 1 } else { y - 1 };
        let down = if y + 1 == self.height { 0 } else { y + 1 };

        [
            self.at(x, up),
            self.at(left, y),
            self.at(right, y),
            self.at(x, down),
        ]
    }

    pub(crate) fn row(&self, y: usize) -> &[CellState] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Text rows in the same glyph format accepted by [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|cell| cell.glyph()).collect())
            .collect()
    }

    pub fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_and_is_empty() {
        let grid = Grid::new(0, 0);
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.get(0, 0), Some(CellState::Empty));

        let grid = Grid::new(4, 3);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.count(CellState::Empty), 12);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(4, 3);
        let before = grid.clone();
        let err = grid.set(4, 0, CellState::Red).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 4, y: 0, width: 4, height: 3 }));
        assert!(grid.set(0, 3, CellState::Red).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_neighbors_wrap() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 1, CellState::Red).unwrap();
        grid.set(0, 2, CellState::Blue).unwrap();

        // (0, 1): up (0, 0), left wraps to (3, 1), right (1, 1), down (0, 2)
        assert_eq!(
            grid.neighbors(0, 1),
            [CellState::Empty, CellState::Red, CellState::Empty, CellState::Blue]
        );
        // (0, 0): up wraps to (0, 2)
        assert_eq!(grid.neighbors(0, 0)[0], CellState::Blue);
    }

    #[test]
    fn test_neighbors_on_single_cell_grid() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, CellState::Green).unwrap();
        assert_eq!(grid.neighbors(0, 0), [CellState::Green; 4]);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["#R.", ".GP"]).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(1, 0), Some(CellState::Red));
        assert_eq!(grid.get(2, 1), Some(CellState::Purple));
        assert_eq!(grid.to_rows(), vec!["#R.".to_string(), ".GP".to_string()]);
    }

    #[test]
    fn test_from_rows_errors() {
        assert!(matches!(
            Grid::from_rows(&["..", "..."]),
            Err(Error::RaggedLayout { row: 1, expected: 2, found: 3 })
        ));
        assert!(matches!(Grid::from_rows(&[".x"]), Err(Error::UnknownGlyph('x'))));
    }

    #[test]
    fn test_hash_tracks_contents() {
        let mut grid = Grid::new(3, 3);
        let empty_hash = grid.hash_grid();
        grid.set(1, 1, CellState::Yellow).unwrap();
        assert_ne!(grid.hash_grid(), empty_hash);
        grid.set(1, 1, CellState::Empty).unwrap();
        assert_eq!(grid.hash_grid(), empty_hash);
    }
}
