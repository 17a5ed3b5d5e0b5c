// ui.rs - Window layout, grid painting and input forwarding

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use tracing::{error, warn};

use conquest::config::{MAX_TICK_RATE, MIN_TICK_RATE};
use conquest::input::commands_for_text;
use conquest::{CellState, Command, Driver, LAYOUTS};

use crate::palette::{color_of, text_on};
use crate::ConquestApp;

const GRID_EXTENT: f32 = 640.0;   // Longest side of the painted grid, in points
const MIN_BOX: f32 = 4.0;
const MAX_BOX: f32 = 48.0;
const SPACING: f32 = 1.0;

/// Pointer state over the grid for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PointerOnGrid {
    /// Cell under the pointer, `None` when off the grid or covered.
    cell: Option<(usize, usize)>,
    /// Primary button went down this frame over a visible cell.
    pressed: bool,
    /// Primary button is held on a press that started on the grid.
    down: bool,
}

/// Press paints, dragging paints every cell entered, releasing or leaving
/// the grid ends the stroke.
fn forward_pointer(driver: &mut Driver, pointer: PointerOnGrid) {
    match pointer.cell {
        Some((x, y)) if pointer.pressed => driver.press(x, y),
        Some((x, y)) if pointer.down => driver.enter(x, y),
        Some(_) => {}
        None if driver.is_drawing() => driver.exit_grid(),
        None => {}
    }
    if !pointer.down && driver.is_drawing() {
        driver.release();
    }
}

impl eframe::App for ConquestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Tick source
        match self.driver.poll(Instant::now()) {
            Ok(true) => ctx.request_repaint(),
            Ok(false) => {}
            Err(err) => error!(%err, "tick failed"),
        }

        // Keyboard commands, unless a widget is taking text
        if !ctx.wants_keyboard_input() {
            let typed: String = ctx.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::Text(text) => Some(text.as_str()),
                        _ => None,
                    })
                    .collect()
            });
            for command in commands_for_text(&typed) {
                self.driver.apply(command);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Color Conquest");

            self.controls(ui);
            ui.separator();
            self.palette(ui);
            ui.separator();
            self.grid(ui);
            ui.separator();

            // Status sink
            ui.label(self.driver.status().to_string());
            let grid = self.driver.engine().grid();
            ui.horizontal(|ui| {
                for state in CellState::COLORS {
                    ui.colored_label(color_of(state), format!("{}: {}", state, grid.count(state)));
                }
            });
        });

        // Keep ticking while running
        if !self.driver.is_paused() {
            ctx.request_repaint();
        }
    }
}

impl ConquestApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.driver.is_paused() { "▶ Resume" } else { "⏸ Pause" };
            if ui.button(button_text).clicked() {
                self.driver.apply(Command::TogglePause);
            }

            if ui.button("⏭ Step").clicked() {
                if let Err(err) = self.driver.tick() {
                    error!(%err, "step failed");
                }
            }

            if ui.button("⏹ Clear").clicked() {
                self.driver.apply(Command::Clear);
            }

            ui.separator();

            ui.label("Layout:");
            egui::ComboBox::from_id_source("layout_selector")
                .selected_text(LAYOUTS[self.selected_layout].name)
                .show_ui(ui, |ui| {
                    for (i, layout) in LAYOUTS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_layout, i, layout.name);
                    }
                });

            if ui.button("Load").clicked() {
                if let Err(err) = self.driver.load_layout(&LAYOUTS[self.selected_layout]) {
                    warn!(%err, "layout rejected");
                }
            }
        });

        ui.horizontal(|ui| {
            let engine = self.driver.engine();
            ui.label(format!("Size: {} x {}", engine.width(), engine.height()));
            if ui.small_button("W−").clicked() {
                self.driver.apply(Command::ShrinkWidth);
            }
            if ui.small_button("W+").clicked() {
                self.driver.apply(Command::GrowWidth);
            }
            if ui.small_button("H−").clicked() {
                self.driver.apply(Command::ShrinkHeight);
            }
            if ui.small_button("H+").clicked() {
                self.driver.apply(Command::GrowHeight);
            }

            ui.separator();

            // Tick rate is a period: larger is slower
            let mut rate = self.driver.tick_rate().get();
            let slider = egui::Slider::new(&mut rate, MIN_TICK_RATE..=MAX_TICK_RATE)
                .logarithmic(true)
                .text("tick rate (1/60 s)");
            if ui.add(slider).changed() {
                if let Err(err) = self.driver.set_tick_rate(rate) {
                    warn!(%err, "tick rate rejected");
                }
            }
        });

        ui.label("Keys: 1-7 select · space pause · +/- tick rate · o/p width · [/] height · x clear · z showcase");
    }

    fn palette(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Draw:");
            for state in CellState::ALL {
                let selected = self.driver.selected() == state;
                let text = egui::RichText::new(format!("{} {}", state.index() + 1, state))
                    .color(text_on(state))
                    .background_color(color_of(state));
                if ui.selectable_label(selected, text).clicked() {
                    self.driver.apply(Command::Select(state));
                }
            }
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) {
        let engine = self.driver.engine();
        let (width, height) = (engine.width(), engine.height());
        let longest = width.max(height) as f32;
        let box_size = (GRID_EXTENT / longest - SPACING).clamp(MIN_BOX, MAX_BOX);
        let pitch = box_size + SPACING;

        let total_size = Vec2::new(pitch * width as f32 - SPACING, pitch * height as f32 - SPACING);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Fill background
        painter.rect_filled(response.rect, 0.0, Color32::from_gray(90));

        // Render sink
        let grid = engine.grid();
        for y in 0..height {
            for x in 0..width {
                let min = Pos2::new(origin.x + x as f32 * pitch, origin.y + y as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(box_size));
                let state = grid.get(x, y).unwrap_or_default();
                painter.rect_filled(rect, 1.0, color_of(state));
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Input source. The response only reports the pointer when nothing
        // (a popup, another window) sits on top of the grid.
        let cell = response.hover_pos().filter(|pos| response.rect.contains(*pos)).map(|pos| {
            let x = ((pos.x - origin.x) / pitch).floor().max(0.0) as usize;
            let y = ((pos.y - origin.y) / pitch).floor().max(0.0) as usize;
            (x.min(width - 1), y.min(height - 1))
        });
        let pressed = cell.is_some() && ui.input(|i| i.pointer.primary_pressed());
        let pointer = PointerOnGrid {
            cell,
            pressed,
            down: pressed || response.is_pointer_button_down_on(),
        };
        forward_pointer(&mut self.driver, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquest::ColorConquestEngine;

    fn driver() -> Driver {
        let mut driver = Driver::new(ColorConquestEngine::new(4, 4)).unwrap();
        driver.apply(Command::Select(CellState::Red));
        driver
    }

    fn press_at(x: usize, y: usize) -> PointerOnGrid {
        PointerOnGrid { cell: Some((x, y)), pressed: true, down: true }
    }

    #[test]
    fn test_press_paints_and_drag_continues() {
        let mut driver = driver();
        forward_pointer(&mut driver, press_at(1, 1));
        forward_pointer(&mut driver, PointerOnGrid { cell: Some((2, 1)), pressed: false, down: true });
        assert!(driver.is_drawing());

        forward_pointer(&mut driver, PointerOnGrid { cell: Some((3, 1)), ..Default::default() });
        assert!(!driver.is_drawing());

        let grid = driver.engine().grid();
        assert_eq!(grid.to_rows(), vec!["....", ".RR.", "....", "...."]);
    }

    #[test]
    fn test_covered_grid_is_not_painted() {
        let mut driver = driver();
        let before = driver.engine().grid().clone();

        // Clicking a popup entry over the grid: the button goes down, but
        // the grid response reports no cell under the pointer.
        forward_pointer(&mut driver, PointerOnGrid { cell: None, pressed: false, down: false });
        assert!(!driver.is_drawing());
        assert_eq!(driver.engine().grid(), &before);
    }

    #[test]
    fn test_stroke_ends_when_covered() {
        let mut driver = driver();
        forward_pointer(&mut driver, press_at(0, 0));
        forward_pointer(&mut driver, PointerOnGrid { cell: None, pressed: false, down: true });
        assert!(!driver.is_drawing());

        forward_pointer(&mut driver, PointerOnGrid { cell: Some((1, 0)), pressed: false, down: true });
        assert_eq!(driver.engine().cell(1, 0), Some(CellState::Empty));
    }
}
