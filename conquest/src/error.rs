// error.rs - Crate error type

use crate::config::{MAX_TICK_RATE, MIN_TICK_RATE};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("tick rate {0} is outside {min}..={max}", min = MIN_TICK_RATE, max = MAX_TICK_RATE)]
    TickRateOutOfRange(u32),
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown layout glyph {0:?}")]
    UnknownGlyph(char),
    #[error("failed to build the row runtime")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    RowTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
