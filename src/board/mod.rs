//! Board representation and game-state types.
//!
//! Contains the core data structures for colors, position indices, checker
//! stacks, moves, and the overall board state.

pub mod grid;
pub mod moves;
pub mod position;
pub mod state;

pub use grid::Grid;
pub use moves::Move;
pub use position::{
    is_bar, is_off, is_point, Color, Landing, ALL_COLORS, BLACK_BAR, BLACK_OFF, BOARD_MAX,
    BOARD_MIN, MAX_DIE, NUM_CHECKERS, NUM_HOME_POINTS, NUM_POINTS, NUM_POSITIONS, WHITE_BAR,
    WHITE_OFF,
};
pub use state::{Board, BoardError};
