// driver.rs - Headless driver around the engine
// Owns the engine and provides the tick source, the draw gesture, keyboard
// commands and the status line. The egui front end calls into this; nothing
// here depends on a window.

use std::fmt;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::cell::CellState;
use crate::config::{
    DEFAULT_DRAW_STATE, DEFAULT_TICK_RATE, MAX_TICK_RATE, MIN_TICK_RATE, TIMER_TICKS_PER_SECOND,
};
use crate::coro::row_runtime;
use crate::engine::ColorConquestEngine;
use crate::error::{Error, Result};
use crate::history::SettleHistory;
use crate::layouts::Layout;

/// Timer ticks (60ths of a second) between two simulation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate(u32);

impl TickRate {
    pub fn new(rate: u32) -> Result<Self> {
        if (MIN_TICK_RATE..=MAX_TICK_RATE).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(Error::TickRateOutOfRange(rate))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_secs_f64(f64::from(self.0) / f64::from(TIMER_TICKS_PER_SECOND))
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(DEFAULT_TICK_RATE)
    }
}

/// Discrete user commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RaiseTickRate,
    LowerTickRate,
    ShrinkWidth,
    GrowWidth,
    ShrinkHeight,
    GrowHeight,
    Clear,
    LoadLayout,
    TogglePause,
    Select(CellState),
}

pub struct Driver {
    engine: ColorConquestEngine,
    runtime: Runtime,
    tick_rate: TickRate,
    paused: bool,
    selected: CellState,
    drawing: bool,
    last_tick: Instant,
    history: SettleHistory,
}

impl Driver {
    pub fn new(engine: ColorConquestEngine) -> Result<Self> {
        Ok(Self {
            engine,
            runtime: row_runtime()?,
            tick_rate: TickRate::default(),
            paused: false,
            selected: DEFAULT_DRAW_STATE,
            drawing: false,
            last_tick: Instant::now(),
            history: SettleHistory::default(),
        })
    }

    pub fn engine(&self) -> &ColorConquestEngine {
        &self.engine
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn selected(&self) -> CellState {
        self.selected
    }

    pub fn is_settled(&self) -> bool {
        self.history.is_settled()
    }

    pub fn set_tick_rate(&mut self, rate: u32) -> Result<()> {
        self.tick_rate = TickRate::new(rate)?;
        debug!(rate, "tick rate changed");
        Ok(())
    }

    /// Step once if running and a full tick interval has elapsed since the
    /// last step. Returns whether a step happened.
    pub fn poll(&mut self, now: Instant) -> Result<bool> {
        if self.paused || now.saturating_duration_since(self.last_tick) < self.tick_rate.interval() {
            return Ok(false);
        }
        self.tick()?;
        self.last_tick = now;
        Ok(true)
    }

    /// Step once regardless of pause state and timing.
    pub fn tick(&mut self) -> Result<()> {
        self.engine.step_rows(&self.runtime)?;
        if self.history.record(self.engine.grid()) {
            debug!(age = self.engine.age(), "grid settled");
        }
        Ok(())
    }

    pub fn apply(&mut self, command: Command) {
        debug!(?command, "command");
        let (width, height) = (self.engine.width(), self.engine.height());
        match command {
            Command::RaiseTickRate => self.nudge_tick_rate(1),
            Command::LowerTickRate => self.nudge_tick_rate(-1),
            Command::ShrinkWidth => self.resize(width.saturating_sub(1), height),
            Command::GrowWidth => self.resize(width + 1, height),
            Command::ShrinkHeight => self.resize(width, height.saturating_sub(1)),
            Command::GrowHeight => self.resize(width, height + 1),
            Command::Clear => self.resize(width, height),
            Command::LoadLayout => {
                if let Err(err) = self.engine.load_fixed_layout() {
                    warn!(%err, "failed to load layout");
                }
                self.history.clear();
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                if !self.paused {
                    self.last_tick = Instant::now();
                }
            }
            Command::Select(state) => self.selected = state,
        }
    }

    pub fn load_layout(&mut self, layout: &Layout) -> Result<()> {
        self.engine.load_layout(layout)?;
        self.history.clear();
        Ok(())
    }

    fn nudge_tick_rate(&mut self, delta: i32) {
        let rate = self.tick_rate.get().saturating_add_signed(delta);
        match TickRate::new(rate) {
            Ok(rate) => self.tick_rate = rate,
            Err(err) => debug!(%err, "tick rate unchanged"),
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.engine.reset(width, height);
        self.history.clear();
    }

    /// Pointer pressed over (x, y): start drawing and paint the cell.
    pub fn press(&mut self, x: usize, y: usize) {
        self.drawing = true;
        self.paint(x, y);
    }

    /// Pointer moved onto (x, y): paint only while drawing.
    pub fn enter(&mut self, x: usize, y: usize) {
        if self.drawing {
            self.paint(x, y);
        }
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }

    pub fn exit_grid(&mut self) {
        self.drawing = false;
    }

    fn paint(&mut self, x: usize, y: usize) {
        if self.engine.cell(x, y) == Some(self.selected) {
            return;
        }
        match self.engine.edit_cell(x, y, self.selected) {
            Ok(()) => self.history.clear(),
            Err(err) => warn!(%err, "ignored edit"),
        }
    }

    pub fn status(&self) -> Status {
        Status {
            paused: self.paused,
            tick_rate: self.tick_rate,
            selected: self.selected,
            age: self.engine.age(),
            settled: self.history.is_settled(),
        }
    }
}

/// Status line contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub paused: bool,
    pub tick_rate: TickRate,
    pub selected: CellState,
    pub age: u64,
    pub settled: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paused {
            f.write_str("PAUSED | ")?;
        }
        write!(
            f,
            "Tickrate: {} | Selected: {} | Age: {}",
            self.tick_rate.get(),
            self.selected.index() + 1,
            self.age
        )?;
        if self.settled {
            f.write_str(" | Settled")?;
        }
        Ok(())
    }
}
