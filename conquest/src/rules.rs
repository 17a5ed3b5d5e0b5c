// rules.rs - Color conquest transition rule
//
// Red, Blue and Yellow beat each other in a cycle (Blue takes Red, Yellow
// takes Blue, Red takes Yellow). Green takes all three, Purple takes Green,
// and any of the three primaries can take Purple back. Every clause is
// checked in order and the first match wins.

use crate::cell::CellState::{self, Blue, Empty, Green, Purple, Red, Wall, Yellow};
use crate::snapshot::ColorSet;

/// Next state of a cell given its current state and its neighbor colors.
pub const fn next_state(state: CellState, around: ColorSet) -> CellState {
    let red = around.contains(Red);
    let blue = around.contains(Blue);
    let yellow = around.contains(Yellow);
    let green = around.contains(Green);
    let purple = around.contains(Purple);

    match state {
        Wall => Wall,
        Empty => {
            if red && !blue && !green {
                Red
            } else if blue && !yellow && !green {
                Blue
            } else if yellow && !red && !green {
                Yellow
            } else if green && !purple {
                Green
            } else if purple && !red && !blue && !yellow {
                Purple
            } else {
                Empty
            }
        }
        Red => {
            if green {
                Green
            } else if blue {
                Blue
            } else {
                Red
            }
        }
        Blue => {
            if green {
                Green
            } else if yellow {
                Yellow
            } else {
                Blue
            }
        }
        Yellow => {
            if green {
                Green
            } else if red {
                Red
            } else {
                Yellow
            }
        }
        Green => {
            if purple {
                Purple
            } else {
                Green
            }
        }
        // Green around a Purple cell is ignored.
        Purple => {
            if red && !blue {
                Red
            } else if blue && !yellow {
                Blue
            } else if yellow && !red {
                Yellow
            } else {
                Purple
            }
        }
    }
}

/// Transition table indexed by `[state.index()][colors.bits()]`.
pub type TransitionTable = [[CellState; ColorSet::COUNT]; CellState::ALL.len()];

pub static TABLE: TransitionTable = build_table();

const fn build_table() -> TransitionTable {
    let mut table = [[Empty; ColorSet::COUNT]; CellState::ALL.len()];
    let mut s = 0;
    while s < CellState::ALL.len() {
        let mut bits = 0;
        while bits < ColorSet::COUNT {
            table[s][bits] = next_state(CellState::ALL[s], ColorSet::from_bits(bits as u8));
            bits += 1;
        }
        s += 1;
    }
    table
}

/// Table lookup equivalent of [`next_state`].
#[inline]
pub fn transition(state: CellState, around: ColorSet) -> CellState {
    TABLE[state.index()][around.bits() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(colors: &[CellState]) -> ColorSet {
        colors.iter().copied().collect()
    }

    #[test]
    fn test_table_matches_cascade() {
        for state in CellState::ALL {
            for bits in 0..ColorSet::COUNT as u8 {
                let around = ColorSet::from_bits(bits);
                assert_eq!(transition(state, around), next_state(state, around));
            }
        }
    }

    #[test]
    fn test_wall_is_inert() {
        for bits in 0..ColorSet::COUNT as u8 {
            assert_eq!(transition(Wall, ColorSet::from_bits(bits)), Wall);
        }
    }

    #[test]
    fn test_nothing_around_keeps_state() {
        for state in CellState::ALL {
            assert_eq!(transition(state, ColorSet::EMPTY), state);
        }
    }

    #[test]
    fn test_empty_priorities() {
        assert_eq!(transition(Empty, set(&[Red])), Red);
        assert_eq!(transition(Empty, set(&[Red, Blue])), Blue);
        assert_eq!(transition(Empty, set(&[Blue, Yellow])), Yellow);
        assert_eq!(transition(Empty, set(&[Yellow, Red])), Red);
        assert_eq!(transition(Empty, set(&[Red, Green])), Green);
        assert_eq!(transition(Empty, set(&[Green, Purple])), Purple);
        assert_eq!(transition(Empty, set(&[Purple])), Purple);
        assert_eq!(transition(Empty, set(&[Purple, Red])), Red);
        // All three primaries cancel out and Purple is blocked by them.
        assert_eq!(transition(Empty, set(&[Red, Blue, Yellow])), Empty);
        assert_eq!(transition(Empty, set(&[Red, Blue, Yellow, Purple])), Empty);
        // Green with Purple present and a primary block: Green loses to Purple,
        // Purple is blocked by Red.
        assert_eq!(transition(Empty, set(&[Red, Blue, Yellow, Green, Purple])), Empty);
    }

    #[test]
    fn test_primary_cycle() {
        assert_eq!(transition(Red, set(&[Blue])), Blue);
        assert_eq!(transition(Red, set(&[Yellow])), Red);
        assert_eq!(transition(Blue, set(&[Yellow])), Yellow);
        assert_eq!(transition(Blue, set(&[Red])), Blue);
        assert_eq!(transition(Yellow, set(&[Red])), Red);
        assert_eq!(transition(Yellow, set(&[Blue])), Yellow);
    }

    #[test]
    fn test_green_beats_primaries() {
        for primary in [Red, Blue, Yellow] {
            assert_eq!(transition(primary, set(&[Green])), Green);
            assert_eq!(transition(primary, set(&[Green, Red, Blue, Yellow])), Green);
        }
        assert_eq!(transition(Green, set(&[Red, Blue, Yellow])), Green);
        assert_eq!(transition(Green, set(&[Purple])), Purple);
    }

    #[test]
    fn test_purple_escape() {
        assert_eq!(transition(Purple, set(&[Green])), Purple);
        assert_eq!(transition(Purple, set(&[Red])), Red);
        assert_eq!(transition(Purple, set(&[Red, Blue])), Blue);
        assert_eq!(transition(Purple, set(&[Blue, Yellow])), Yellow);
        assert_eq!(transition(Purple, set(&[Yellow])), Yellow);
        assert_eq!(transition(Purple, set(&[Red, Blue, Yellow])), Purple);
        assert_eq!(transition(Purple, set(&[Red, Green])), Red);
    }
}
