// config.rs - Compile-time configuration for the conquest simulation

use crate::cell::CellState;

pub const DEFAULT_WIDTH: usize = 8;                   // Grid width on startup and after a fresh engine
pub const DEFAULT_HEIGHT: usize = 8;                  // Grid height on startup
pub const MIN_DIMENSION: usize = 1;                   // Resizes clamp to at least 1x1

pub const DEFAULT_TICK_RATE: u32 = 15;                // Timer ticks between simulation steps
pub const MIN_TICK_RATE: u32 = 1;
pub const MAX_TICK_RATE: u32 = 600;
pub const TIMER_TICKS_PER_SECOND: u32 = 60;           // Tick rate is measured in 60ths of a second

pub const HISTORY_LEN: usize = 10;                    // Grid hashes kept for settle detection

pub const DEFAULT_DRAW_STATE: CellState = CellState::Wall;
