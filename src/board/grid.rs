//! Per-slot checker stacks.

use serde::{Deserialize, Serialize};

use super::position::Color;

/// The checkers stacked on one slot: an owning color and a count.
///
/// A slot is owned by at most one color. `count == 0` always pairs with
/// `color == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    pub color: Option<Color>,
    pub count: u8,
}

impl Grid {
    /// An empty slot.
    pub const EMPTY: Grid = Grid { color: None, count: 0 };

    /// Creates a stack of `count` checkers of `color`. A zero count yields
    /// [`Grid::EMPTY`].
    pub const fn new(color: Color, count: u8) -> Self {
        if count == 0 {
            Grid::EMPTY
        } else {
            Grid { color: Some(color), count }
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether at least one checker of `color` sits here.
    pub fn is_owned_by(&self, color: Color) -> bool {
        self.count > 0 && self.color == Some(color)
    }

    /// Whether exactly one checker of `color` sits here.
    pub fn is_blot_of(&self, color: Color) -> bool {
        self.count == 1 && self.color == Some(color)
    }

    /// Whether a checker of `color` is kept out by two or more opponents.
    pub fn blocks(&self, color: Color) -> bool {
        self.count >= 2 && self.color != Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_empty() {
        assert_eq!(Grid::new(Color::White, 0), Grid::EMPTY);
        assert_eq!(Grid::default(), Grid::EMPTY);
        assert!(Grid::EMPTY.is_empty());
    }

    #[test]
    fn ownership_and_blots() {
        let blot = Grid::new(Color::Black, 1);
        assert!(blot.is_owned_by(Color::Black));
        assert!(!blot.is_owned_by(Color::White));
        assert!(blot.is_blot_of(Color::Black));
        assert!(!blot.blocks(Color::White));
    }

    #[test]
    fn two_opponents_block() {
        let point = Grid::new(Color::Black, 2);
        assert!(point.blocks(Color::White));
        assert!(!point.blocks(Color::Black));
        assert!(!Grid::EMPTY.blocks(Color::White));
    }
}
