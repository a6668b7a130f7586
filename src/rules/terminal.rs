//! Terminal detection and scoring of finished games.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, NUM_CHECKERS};

/// How decisively a finished game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    /// The loser bore off at least one checker.
    Single,
    /// The loser bore off nothing.
    Gammon,
    /// The loser bore off nothing and still has a checker on the bar or in
    /// the winner's home quadrant.
    Backgammon,
}

impl WinKind {
    /// Points scored at a cube value of one.
    pub const fn points(self) -> u8 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub kind: WinKind,
}

impl Board {
    /// Returns the color that has borne off all 15 checkers, if any.
    ///
    /// Both colors finished cannot arise from legal play; such a board is
    /// reported as corrupt and yields `None`.
    pub fn winner(&self) -> Option<Color> {
        let white = self.off_count(Color::White) == NUM_CHECKERS;
        let black = self.off_count(Color::Black) == NUM_CHECKERS;
        match (white, black) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            (false, false) => None,
            (true, true) => {
                log::error!("corrupt board: both colors have borne off every checker");
                None
            }
        }
    }

    /// Returns the winner and the kind of win once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.winner()?;
        let loser = winner.opponent();
        let kind = if self.off_count(loser) > 0 {
            WinKind::Single
        } else if self.bar_count(loser) > 0
            || winner.home_points().any(|pos| self.grids[pos].is_owned_by(loser))
        {
            WinKind::Backgammon
        } else {
            WinKind::Gammon
        };
        Some(GameResult { winner, kind })
    }
}
