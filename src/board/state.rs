//! Board state representation.
//!
//! Holds the complete snapshot of a backgammon position: the checker stack on
//! every one of the 28 slots, both colors combined.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::position::{is_off, is_point, Color, ALL_COLORS, NUM_CHECKERS, NUM_POSITIONS};

/// Errors reported by direct board access and invariant checks.
///
/// These describe malformed boards, not illegal moves; see
/// [`MoveError`](crate::rules::MoveError) for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {0} is outside 0..28")]
    PositionOutOfRange(usize),

    #[error("slot {0} has a count and owner that disagree")]
    InconsistentGrid(usize),

    #[error("{color:?} checker on slot {pos}, which that color never occupies")]
    MisplacedChecker { color: Color, pos: usize },

    #[error("{color:?} has {count} checkers, expected 15")]
    CheckerCount { color: Color, count: u32 },

    #[error("both colors have borne off every checker")]
    BothBorneOff,
}

/// Standard opening layout.
const STARTING_LAYOUT: [(usize, Grid); 8] = [
    (24, Grid::new(Color::White, 2)),
    (13, Grid::new(Color::White, 5)),
    (8, Grid::new(Color::White, 3)),
    (6, Grid::new(Color::White, 5)),
    (1, Grid::new(Color::Black, 2)),
    (12, Grid::new(Color::Black, 5)),
    (17, Grid::new(Color::Black, 3)),
    (19, Grid::new(Color::Black, 5)),
];

/// Complete board state.
///
/// Uses a fixed-size array indexed by position (see
/// [`position`](super::position)) for O(1) lookup. This avoids heap
/// allocation, so cloning a board for a scratch exploration is a memcpy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grids: [Grid; NUM_POSITIONS],
}

impl Board {
    /// Creates a board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Creates a board with no checkers at all.
    pub fn empty() -> Self {
        Board {
            grids: [Grid::EMPTY; NUM_POSITIONS],
        }
    }

    /// Creates a board from a sparse layout; see [`Board::reset_to`].
    pub fn from_layout(layout: &[(usize, Grid)]) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        board.reset_to(layout)?;
        Ok(board)
    }

    /// Creates a board from a full snapshot.
    pub fn from_grids(grids: [Grid; NUM_POSITIONS]) -> Self {
        Board { grids }
    }

    /// Restores the standard starting position.
    pub fn reset(&mut self) {
        self.grids = [Grid::EMPTY; NUM_POSITIONS];
        for (pos, grid) in STARTING_LAYOUT {
            self.grids[pos] = grid;
        }
    }

    /// Replaces the whole board with `layout`; every slot not listed is
    /// cleared. Later entries for the same slot win.
    ///
    /// No game rule is checked. On error the board is left unchanged.
    pub fn reset_to(&mut self, layout: &[(usize, Grid)]) -> Result<(), BoardError> {
        let mut grids = [Grid::EMPTY; NUM_POSITIONS];
        for &(pos, grid) in layout {
            let slot = grids.get_mut(pos).ok_or(BoardError::PositionOutOfRange(pos))?;
            *slot = grid;
        }
        self.grids = grids;
        Ok(())
    }

    /// Returns the stack at `pos`.
    pub fn grid(&self, pos: usize) -> Result<Grid, BoardError> {
        self.grids
            .get(pos)
            .copied()
            .ok_or(BoardError::PositionOutOfRange(pos))
    }

    /// Overwrites the stack at `pos` without any rule validation.
    pub fn set_grid(&mut self, pos: usize, grid: Grid) -> Result<(), BoardError> {
        let slot = self
            .grids
            .get_mut(pos)
            .ok_or(BoardError::PositionOutOfRange(pos))?;
        *slot = grid;
        Ok(())
    }

    /// Returns the full snapshot, indexed by position.
    pub fn grids(&self) -> &[Grid; NUM_POSITIONS] {
        &self.grids
    }

    /// Checkers of `color` on its bar.
    pub fn bar_count(&self, color: Color) -> u8 {
        self.grids[color.bar()].count
    }

    /// Checkers of `color` already borne off.
    pub fn off_count(&self, color: Color) -> u8 {
        self.grids[color.off()].count
    }

    /// Total checkers of `color` over every slot, bar and off included.
    pub fn checker_count(&self, color: Color) -> u32 {
        self.grids
            .iter()
            .filter(|g| g.color == Some(color))
            .map(|g| u32::from(g.count))
            .sum()
    }

    /// Verifies the structural invariants every reachable position satisfies.
    ///
    /// Boards assembled through [`Board::set_grid`] can break them; legal play
    /// from a valid board never does.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        for (pos, grid) in self.grids.iter().enumerate() {
            let color = match (grid.color, grid.count) {
                (None, 0) => continue,
                (Some(color), n) if n > 0 => color,
                _ => return Err(BoardError::InconsistentGrid(pos)),
            };
            if !can_occupy(color, pos) {
                return Err(BoardError::MisplacedChecker { color, pos });
            }
        }
        for color in ALL_COLORS {
            let count = self.checker_count(color);
            if count != u32::from(NUM_CHECKERS) {
                return Err(BoardError::CheckerCount { color, count });
            }
        }
        if self.off_count(Color::White) == NUM_CHECKERS
            && self.off_count(Color::Black) == NUM_CHECKERS
        {
            return Err(BoardError::BothBorneOff);
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Whether a checker of `color` may ever rest on `pos`.
fn can_occupy(color: Color, pos: usize) -> bool {
    is_point(pos) || pos == color.bar() || (is_off(pos) && pos == color.off())
}
