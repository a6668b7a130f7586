//! Game rules.
//!
//! Single-checker move legality and application, bear-off eligibility, and
//! terminal detection.

pub mod legality;
pub mod terminal;

pub use legality::{MoveError, MoveOutcome};
pub use terminal::{GameResult, WinKind};
