//! Single-checker moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::{is_bar, is_off};

/// One checker's relocation consuming a single die.
///
/// `to` follows from `from`, `steps` and the mover's direction but is carried
/// explicitly. For a bear-off `to` is the off slot and `steps` may exceed the
/// exact distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub steps: u8,
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, steps: u8, to: usize) -> Self {
        Move { from, steps, to }
    }

    /// Whether this move brings a checker in from the bar.
    pub const fn is_entry(&self) -> bool {
        is_bar(self.from)
    }

    /// Whether this move bears a checker off.
    pub const fn is_bear_off(&self) -> bool {
        is_off(self.to)
    }
}

/// Formats in the usual `24/18`, `bar/22`, `3/off` notation.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_entry() {
            f.write_str("bar")?;
        } else {
            write!(f, "{}", self.from)?;
        }
        if self.is_bear_off() {
            f.write_str("/off")
        } else {
            write!(f, "/{}", self.to)
        }
    }
}
