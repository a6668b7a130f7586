//! Gammon rules engine library.
//!
//! Exposes the board representation, move legality, action-tree generation,
//! feature encoding, and notation modules for use by hosts, integration
//! tests, and benchmarks.

pub mod board;
pub mod movegen;
pub mod nn;
pub mod protocol;
pub mod rules;

pub use board::{Board, BoardError, Color, Grid, Move};
pub use movegen::{ActionConfig, ActionNode, ActionTree, MovePolicy};
pub use rules::{GameResult, MoveError, MoveOutcome, WinKind};
