//! Checker colors and the position index layout.
//!
//! The board has 28 addressable slots:
//!
//! ```text
//!    13 14 15 16 17 18  25   19 20 21 22 23 24 27
//!   +-------------------+---+-------------------+---+
//!   |      BLACK OUTER  | B |    BLACK HOME     | O |
//!   |                   | A |                   | F |
//!   |      WHITE OUTER  | R |    WHITE HOME     | F |
//!   +-------------------+---+-------------------+---+
//!    12 11 10  9  8  7   0    6  5  4  3  2  1  26
//! ```
//!
//! White travels 24 -> 1 and bears off past point 1 into slot 26. Black
//! travels 1 -> 24 and bears off past point 24 into slot 27. Slot 0 is the
//! black bar and slot 25 the white bar, so a bar is always one pip behind the
//! far end of its color's course.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Bar slot for black checkers.
pub const BLACK_BAR: usize = 0;
/// Lowest board point.
pub const BOARD_MIN: usize = 1;
/// Highest board point.
pub const BOARD_MAX: usize = 24;
/// Bar slot for white checkers.
pub const WHITE_BAR: usize = 25;
/// Off slot for white checkers.
pub const WHITE_OFF: usize = 26;
/// Off slot for black checkers.
pub const BLACK_OFF: usize = 27;

/// Total number of addressable slots.
pub const NUM_POSITIONS: usize = 28;
/// Number of board points.
pub const NUM_POINTS: usize = 24;
/// Number of points in a home quadrant.
pub const NUM_HOME_POINTS: usize = 6;
/// Checkers per side.
pub const NUM_CHECKERS: u8 = 15;
/// Largest face of a die.
pub const MAX_DIE: u8 = 6;

/// A checker color. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

/// Both colors in encoding order.
pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

impl Color {
    /// Returns the other color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns this color's bar slot.
    pub const fn bar(self) -> usize {
        match self {
            Color::White => WHITE_BAR,
            Color::Black => BLACK_BAR,
        }
    }

    /// Returns this color's off slot.
    pub const fn off(self) -> usize {
        match self {
            Color::White => WHITE_OFF,
            Color::Black => BLACK_OFF,
        }
    }

    /// Returns the six points of this color's home quadrant.
    pub fn home_points(self) -> RangeInclusive<usize> {
        match self {
            Color::White => BOARD_MIN..=NUM_HOME_POINTS,
            Color::Black => (BOARD_MAX - NUM_HOME_POINTS + 1)..=BOARD_MAX,
        }
    }

    /// Whether `pos` is a point of this color's home quadrant.
    pub const fn is_home(self, pos: usize) -> bool {
        match self {
            Color::White => pos >= BOARD_MIN && pos <= NUM_HOME_POINTS,
            Color::Black => pos > BOARD_MAX - NUM_HOME_POINTS && pos <= BOARD_MAX,
        }
    }

    /// Whether a checker of this color may start a move from `pos`:
    /// a board point or its own bar.
    pub const fn is_origin(self, pos: usize) -> bool {
        is_point(pos) || pos == self.bar()
    }

    /// Pips from `pos` to this color's off slot, counting the bear-off as
    /// one pip past the last point.
    pub const fn distance_to_off(self, pos: usize) -> usize {
        match self {
            Color::White => pos,
            Color::Black => BOARD_MAX + 1 - pos,
        }
    }

    /// Where a checker of this color starting at `from` lands after `steps`
    /// pips. `from` must be a valid origin for this color.
    pub const fn advance(self, from: usize, steps: usize) -> Landing {
        match self {
            Color::White => {
                if steps >= from {
                    Landing::Off { exact: steps == from }
                } else {
                    Landing::Point(from - steps)
                }
            }
            Color::Black => {
                let to = from + steps;
                if to > BOARD_MAX {
                    Landing::Off { exact: to == BOARD_MAX + 1 }
                } else {
                    Landing::Point(to)
                }
            }
        }
    }

    /// Pips needed to travel from `from` to `to` in this color's direction.
    ///
    /// A move to the own off slot counts the exact distance. Returns `None`
    /// when `to` is not reachable from `from` by moving forward.
    pub fn steps_between(self, from: usize, to: usize) -> Option<usize> {
        if !self.is_origin(from) {
            return None;
        }
        if to == self.off() {
            return Some(self.distance_to_off(from));
        }
        if !is_point(to) {
            return None;
        }
        let steps = match self {
            Color::White => from.checked_sub(to)?,
            Color::Black => to.checked_sub(from)?,
        };
        (steps > 0).then_some(steps)
    }

    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Parses a color from its single-character notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<Color> {
        match c {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

/// Where a moved checker ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// A board point in `1..=24`.
    Point(usize),
    /// Borne off; `exact` is false when the die overshoots the off slot.
    Off { exact: bool },
}

/// Whether `pos` is one of the 24 board points.
pub const fn is_point(pos: usize) -> bool {
    pos >= BOARD_MIN && pos <= BOARD_MAX
}

/// Whether `pos` is a bar slot of either color.
pub const fn is_bar(pos: usize) -> bool {
    pos == WHITE_BAR || pos == BLACK_BAR
}

/// Whether `pos` is an off slot of either color.
pub const fn is_off(pos: usize) -> bool {
    pos == WHITE_OFF || pos == BLACK_OFF
}
