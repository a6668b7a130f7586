//! Single-move legality and application.
//!
//! Every check is a pure decision on the current board. Failures are reported
//! as a specific [`MoveError`], checked in a fixed precedence:
//!
//! 1. `BarNeeded`: the mover has a checker on its bar and `from` is elsewhere
//! 2. `OutOfRange`: `from` is not an addressable slot
//! 3. `ToOrigin`: zero steps, or `from == to`
//! 4. `Empty`, then `OpponentChecker`: ownership of the origin
//! 5. `OutOfRange`: `from` is an off slot, or `to` cannot be reached forward
//! 6. `Blocked`: two or more opponent checkers on the destination point
//! 7. `OutOfRange`: more than six steps
//! 8. `CannotBearOff`: bear-off while not eligible, or an overshoot with a
//!    checker still farther back

use crate::board::{
    Board, Color, Grid, Landing, Move, BOARD_MAX, BOARD_MIN, MAX_DIE, NUM_HOME_POINTS,
    NUM_POSITIONS,
};

/// Reasons a single-checker move is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("move ends on its origin")]
    ToOrigin,

    #[error("no checker on the origin")]
    Empty,

    #[error("origin holds an opponent checker")]
    OpponentChecker,

    #[error("a checker on the bar must enter first")]
    BarNeeded,

    #[error("destination is held by two or more opponent checkers")]
    Blocked,

    #[error("position or step count out of range")]
    OutOfRange,

    #[error("checker cannot bear off yet")]
    CannotBearOff,
}

/// What a legal move did to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Moved onto an empty or own slot.
    Moved,
    /// Hit a lone opponent checker, sending it to its bar.
    Hit,
}

impl Board {
    /// Checks moving a `color` checker from `from` by `steps` pips.
    ///
    /// Returns the destination slot (the own off slot for a bear-off).
    pub fn check_move_from(
        &self,
        color: Color,
        from: usize,
        steps: u8,
    ) -> Result<usize, MoveError> {
        self.check_origin(color, from, steps == 0)?;
        self.check_destination(color, from, steps)
    }

    /// Whether a `color` checker on `from` may move `steps` pips.
    pub fn can_move_from(&self, color: Color, from: usize, steps: u8) -> bool {
        self.check_move_from(color, from, steps).is_ok()
    }

    /// Whether any `color` checker may move `steps` pips.
    pub fn can_move(&self, color: Color, steps: u8) -> bool {
        std::iter::once(color.bar())
            .chain(BOARD_MIN..=BOARD_MAX)
            .any(|from| self.can_move_from(color, from, steps))
    }

    /// Whether `color` may bear off: nothing on its bar and every on-board
    /// checker inside its home quadrant.
    pub fn can_bear_off(&self, color: Color) -> bool {
        if self.grids[color.bar()].count > 0 {
            return false;
        }
        (BOARD_MIN..=BOARD_MAX)
            .filter(|&pos| !color.is_home(pos))
            .all(|pos| !self.grids[pos].is_owned_by(color))
    }

    /// Validates and applies moving a `color` checker from `from` to `to`.
    ///
    /// The die is recomputed from the two slots; a bear-off counts the exact
    /// distance. On error the board is untouched.
    pub fn move_checker(
        &mut self,
        color: Color,
        from: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let checked = self.check_origin(color, from, from == to).and_then(|()| {
            let steps = color
                .steps_between(from, to)
                .and_then(|s| u8::try_from(s).ok())
                .ok_or(MoveError::OutOfRange)?;
            self.check_destination(color, from, steps)
        });
        match checked {
            Ok(dest) => {
                debug_assert_eq!(dest, to);
                Ok(self.relocate(color, from, dest))
            }
            Err(e) => {
                log::debug!("rejected {:?} move {} -> {}: {}", color, from, to, e);
                Err(e)
            }
        }
    }

    /// Validates and applies `mv`, using its carried die.
    ///
    /// Unlike [`Board::move_checker`] this replays overshooting bear-offs.
    pub fn apply(&mut self, color: Color, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let dest = self.check_move_from(color, mv.from, mv.steps)?;
        if dest != mv.to {
            return Err(MoveError::OutOfRange);
        }
        Ok(self.relocate(color, mv.from, dest))
    }

    /// Returns the board after `color` plays `moves` in order, leaving `self`
    /// untouched.
    pub fn play(&self, color: Color, moves: &[Move]) -> Result<Board, MoveError> {
        let mut board = self.clone();
        for mv in moves {
            board.apply(color, mv)?;
        }
        Ok(board)
    }

    /// Bar, range, and ownership checks on the origin.
    fn check_origin(&self, color: Color, from: usize, stays_put: bool) -> Result<(), MoveError> {
        let bar = color.bar();
        if from != bar && self.grids[bar].count > 0 {
            return Err(MoveError::BarNeeded);
        }
        if from >= NUM_POSITIONS {
            return Err(MoveError::OutOfRange);
        }
        if stays_put {
            return Err(MoveError::ToOrigin);
        }
        let origin = self.grids[from];
        if origin.count == 0 {
            return Err(MoveError::Empty);
        }
        if origin.color != Some(color) {
            return Err(MoveError::OpponentChecker);
        }
        if !color.is_origin(from) {
            return Err(MoveError::OutOfRange);
        }
        Ok(())
    }

    /// Blocking, die range, and bear-off checks; assumes a valid origin.
    fn check_destination(&self, color: Color, from: usize, steps: u8) -> Result<usize, MoveError> {
        let landing = color.advance(from, usize::from(steps));
        if let Landing::Point(to) = landing {
            if self.grids[to].blocks(color) {
                return Err(MoveError::Blocked);
            }
        }
        if steps > MAX_DIE {
            return Err(MoveError::OutOfRange);
        }
        match landing {
            Landing::Point(to) => Ok(to),
            Landing::Off { exact } => {
                if !self.can_bear_off(color) {
                    return Err(MoveError::CannotBearOff);
                }
                if !exact && self.has_checker_behind(color, from) {
                    return Err(MoveError::CannotBearOff);
                }
                Ok(color.off())
            }
        }
    }

    /// Whether `color` has a home checker farther from the off slot than
    /// `from`. Only meaningful once `color` can bear off.
    fn has_checker_behind(&self, color: Color, from: usize) -> bool {
        let farther = match color {
            Color::White => (from + 1)..=NUM_HOME_POINTS,
            Color::Black => (BOARD_MAX - NUM_HOME_POINTS + 1)..=from.saturating_sub(1),
        };
        farther.into_iter().any(|pos| self.grids[pos].is_owned_by(color))
    }

    /// Moves one checker without validation, hitting a lone opponent.
    pub(crate) fn relocate(&mut self, color: Color, from: usize, to: usize) -> MoveOutcome {
        let origin = &mut self.grids[from];
        origin.count -= 1;
        if origin.count == 0 {
            origin.color = None;
        }

        let dest = self.grids[to];
        match dest.color {
            Some(victim) if victim != color && dest.count == 1 => {
                self.grids[to] = Grid::new(color, 1);
                let bar = &mut self.grids[victim.bar()];
                bar.color = Some(victim);
                bar.count += 1;
                MoveOutcome::Hit
            }
            _ => {
                self.grids[to] = Grid::new(color, dest.count + 1);
                MoveOutcome::Moved
            }
        }
    }
}
