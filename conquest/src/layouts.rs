// layouts.rs - Built-in starting maps

use crate::grid::Grid;
use crate::error::Result;

/// A named, hard-coded starting map. One glyph per cell, rows top to bottom.
pub struct Layout {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Layout {
    pub fn to_grid(&self) -> Result<Grid> {
        Grid::from_rows(self.rows)
    }
}

/// Walled corridors seeded with every color, plus an arena in the middle.
pub const SHOWCASE: Layout = Layout {
    name: "Showcase",
    rows: &[
        "############",
        "#R.....P...#",
        "#.########G#",
        "#.#R.##.R#.#",
        "#.#BY##PG#.#",
        "#B########.#",
        "#.#......#Y#",
        "#.#......#.#",
        "#.#...R..#.#",
        "#Y#..YB..#.#",
        "#.#......#B#",
        "#.#......#.#",
        "#.########.#",
        "#G...P...R.#",
        "############",
    ],
};

pub const LAYOUTS: &[Layout] = &[
    SHOWCASE,
    Layout {
        name: "Triangle",
        rows: &[
            "................",
            "................",
            "....R...........",
            "................",
            "................",
            "................",
            "..........B.....",
            "................",
            "................",
            "................",
            "......Y.........",
            "................",
        ],
    },
    Layout {
        name: "Siege",
        rows: &[
            "..............",
            "..############",
            "..#..........#",
            "..#....G.....#",
            "..#..........#",
            "..############",
            "..............",
            "P.............",
            "..............",
            ".......R......",
        ],
    },
    Layout {
        name: "Quadrants",
        rows: &[
            "........#........",
            "...R....#....B...",
            "........#........",
            "........#........",
            "########.########",
            "........#........",
            "........#........",
            "...Y....#....G...",
            "........#........",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn test_all_layouts_parse() {
        for layout in LAYOUTS {
            let grid = layout.to_grid().unwrap_or_else(|e| panic!("{}: {e}", layout.name));
            assert_eq!(grid.height(), layout.rows.len(), "{}", layout.name);
        }
    }

    #[test]
    fn test_showcase_dimensions() {
        let grid = SHOWCASE.to_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (12, 15));
        assert_eq!(grid.get(0, 0), Some(CellState::Wall));
        assert_eq!(grid.get(1, 1), Some(CellState::Red));
        for color in CellState::COLORS {
            assert!(grid.count(color) > 0, "showcase is missing {color}");
        }
    }
}
