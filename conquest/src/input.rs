// input.rs - Keyboard map for the driver commands

use crate::cell::CellState;
use crate::driver::Command;

/// Map a typed character to a command. Digits 1-7 and their US-layout shifted
/// symbols select a draw state.
pub fn command_for_char(ch: char) -> Option<Command> {
    let command = match ch {
        '+' | '=' => Command::RaiseTickRate,
        '-' => Command::LowerTickRate,
        'o' | 'O' => Command::ShrinkWidth,
        'p' | 'P' => Command::GrowWidth,
        '[' | '{' => Command::ShrinkHeight,
        ']' | '}' => Command::GrowHeight,
        'x' | 'X' => Command::Clear,
        'z' | 'Z' => Command::LoadLayout,
        ' ' => Command::TogglePause,
        '1' | '!' => Command::Select(CellState::Empty),
        '2' | '@' => Command::Select(CellState::Wall),
        '3' | '#' => Command::Select(CellState::Red),
        '4' | '$' => Command::Select(CellState::Blue),
        '5' | '%' => Command::Select(CellState::Yellow),
        '6' | '^' => Command::Select(CellState::Green),
        '7' | '&' => Command::Select(CellState::Purple),
        _ => return None,
    };
    Some(command)
}

/// Every command reachable from `text`, in typing order.
pub fn commands_for_text(text: &str) -> impl Iterator<Item = Command> + '_ {
    text.chars().filter_map(command_for_char)
}
