// cell.rs - Cell states of the conquest grid

use std::fmt;

/// State held by a single grid cell.
///
/// The discriminants are the stable indices used by the draw selection and the
/// status line (which shows `index + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Wall = 1,
    Red = 2,
    Blue = 3,
    Yellow = 4,
    Green = 5,
    Purple = 6,
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Wall,
        CellState::Red,
        CellState::Blue,
        CellState::Yellow,
        CellState::Green,
        CellState::Purple,
    ];

    /// The five competing colors, in rule order.
    pub const COLORS: [CellState; 5] = [
        CellState::Red,
        CellState::Blue,
        CellState::Yellow,
        CellState::Green,
        CellState::Purple,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<CellState> {
        match index {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Wall),
            2 => Some(CellState::Red),
            3 => Some(CellState::Blue),
            4 => Some(CellState::Yellow),
            5 => Some(CellState::Green),
            6 => Some(CellState::Purple),
            _ => None,
        }
    }

    /// True for the five colors, false for Empty and Wall.
    #[inline]
    pub const fn is_color(self) -> bool {
        !matches!(self, CellState::Empty | CellState::Wall)
    }

    /// Glyph used by the text layouts.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Red => 'R',
            CellState::Blue => 'B',
            CellState::Yellow => 'Y',
            CellState::Green => 'G',
            CellState::Purple => 'P',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<CellState> {
        match glyph {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'R' => Some(CellState::Red),
            'B' => Some(CellState::Blue),
            'Y' => Some(CellState::Yellow),
            'G' => Some(CellState::Green),
            'P' => Some(CellState::Purple),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CellState::Empty => "Empty",
            CellState::Wall => "Wall",
            CellState::Red => "Red",
            CellState::Blue => "Blue",
            CellState::Yellow => "Yellow",
            CellState::Green => "Green",
            CellState::Purple => "Purple",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
