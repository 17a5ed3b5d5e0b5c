// coro.rs - Tick computed as one cooperative task per row

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::cell::CellState;
use crate::engine::ColorConquestEngine;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rules;
use crate::snapshot::AdjacencySnapshot;

/// Single-threaded runtime the row tasks interleave on.
pub fn row_runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().build()?)
}

/// Row coroutine: computes the next state of every cell in row `y`.
async fn process_row(
    y: usize,
    grid: Arc<Grid>,
    snapshot: Arc<AdjacencySnapshot>,
) -> (usize, Vec<CellState>) {
    let mut row = Vec::with_capacity(grid.width());
    for x in 0..grid.width() {
        row.push(rules::transition(grid.at(x, y), snapshot.at(x, y)));
        tokio::task::yield_now().await;
    }
    (y, row)
}

impl ColorConquestEngine {
    /// Same tick as [`ColorConquestEngine::step`], with each row running as its
    /// own task. Rows only read the shared pre-step grid, and the assembled
    /// grid is committed in one go after every row has finished.
    pub fn step_rows(&mut self, runtime: &Runtime) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let grid = Arc::new(self.grid().clone());
        let snapshot = Arc::new(AdjacencySnapshot::capture(&grid));

        let next = runtime.block_on(async {
            let handles: Vec<_> = (0..height)
                .map(|y| tokio::spawn(process_row(y, Arc::clone(&grid), Arc::clone(&snapshot))))
                .collect();

            let mut next = vec![CellState::Empty; width * height];
            for handle in handles {
                let (y, row) = handle.await?;
                next[y * width..(y + 1) * width].copy_from_slice(&row);
            }
            Ok::<_, Error>(next)
        })?;

        self.commit(Grid::from_cells(width, height, next));
        Ok(())
    }
}
