// lib.rs - Color conquest, a territory-spread cellular automaton on a toroidal grid
//
// Five colors compete for the cells of the grid. Each tick every cell looks
// at the colors of its four orthogonal neighbors (wrapping at the edges) and
// changes according to a fixed priority rule, see rules.rs.

pub mod cell;
pub mod config;
pub mod coro;
pub mod driver;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod input;
pub mod layouts;
pub mod rules;
pub mod snapshot;

pub use cell::CellState;
pub use driver::{Command, Driver, Status, TickRate};
pub use engine::ColorConquestEngine;
pub use error::{Error, Result};
pub use grid::Grid;
pub use layouts::{Layout, LAYOUTS};
pub use snapshot::{AdjacencySnapshot, ColorSet};
