//! Text formats for boards.
//!
//! Implements the compact notation used to log, store, and reload positions.

pub mod notation;

pub use notation::{format_board, parse_board, NotationError};
