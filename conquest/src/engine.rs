// engine.rs - The color conquest engine: owned grid state plus the tick operation

use tracing::{debug, trace};

use crate::cell::CellState;
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;
use crate::grid::Grid;
use crate::layouts::{Layout, SHOWCASE};
use crate::rules;
use crate::snapshot::AdjacencySnapshot;

#[derive(Debug, Clone)]
pub struct ColorConquestEngine {
    grid: Grid,
    age: u64,
}

impl Default for ColorConquestEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl ColorConquestEngine {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            age: 0,
        }
    }

    /// Wrap an existing grid, age 0.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, age: 0 }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Ticks since the last reset, resize or layout load.
    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        self.grid.get(x, y)
    }

    /// Reallocate an all-Empty grid. Zero dimensions are clamped to 1.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.grid = Grid::new(width, height);
        self.age = 0;
        debug!(width = self.width(), height = self.height(), "grid reset");
    }

    /// Replace the grid with the built-in showcase map.
    pub fn load_fixed_layout(&mut self) -> Result<()> {
        self.load_layout(&SHOWCASE)
    }

    pub fn load_layout(&mut self, layout: &Layout) -> Result<()> {
        self.grid = layout.to_grid()?;
        self.age = 0;
        debug!(
            layout = layout.name,
            width = self.width(),
            height = self.height(),
            "layout loaded"
        );
        Ok(())
    }

    /// Set one cell directly, bypassing the transition rule.
    pub fn edit_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        self.grid.set(x, y, state)
    }

    /// Advance the whole grid by one tick.
    pub fn step(&mut self) {
        let snapshot = AdjacencySnapshot::capture(&self.grid);
        let (width, height) = (self.width(), self.height());

        let mut next = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                next.push(rules::transition(self.grid.at(x, y), snapshot.at(x, y)));
            }
        }

        self.commit(Grid::from_cells(width, height, next));
    }

    /// Swap in a fully computed next grid and count the tick.
    pub(crate) fn commit(&mut self, next: Grid) {
        self.grid = next;
        self.age += 1;
        trace!(age = self.age, "tick");
    }
}
