// palette.rs - Display colors for cell states

use conquest::CellState;
use egui::Color32;

pub const MAGENTA: Color32 = Color32::from_rgb(255, 0, 255);

/// Display color of a cell state.
pub fn color_of(state: CellState) -> Color32 {
    match state {
        CellState::Empty => Color32::WHITE,
        CellState::Wall => Color32::BLACK,
        CellState::Red => Color32::RED,
        CellState::Blue => Color32::BLUE,
        CellState::Yellow => Color32::YELLOW,
        CellState::Green => Color32::GREEN,
        CellState::Purple => MAGENTA,
    }
}

/// Readable text color on top of `color_of(state)`.
pub fn text_on(state: CellState) -> Color32 {
    match state {
        CellState::Wall | CellState::Blue => Color32::WHITE,
        _ => Color32::BLACK,
    }
}
