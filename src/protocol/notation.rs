//! Compact board notation.
//!
//! A position is written as the occupied slots in ascending order, separated
//! by spaces, each as `<pos>:<color><count>`:
//!
//! ```text
//! 1:B2 6:W5 8:W3 12:B5 13:W5 17:B3 19:B5 24:W2
//! ```
//!
//! `<color>` is `W` or `B`; `<count>` is one hex digit, so 10-15 are `A`-`F`.
//! A board with no checkers is written `-`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color, Grid, NUM_CHECKERS, NUM_POSITIONS};

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid entry: '{0}'")]
    InvalidEntry(String),

    #[error("invalid position: '{0}'")]
    InvalidPosition(String),

    #[error("invalid color character: '{0}'")]
    InvalidColor(char),

    #[error("invalid checker count: '{0}'")]
    InvalidCount(String),

    #[error("duplicate entry for position {0}")]
    DuplicatePosition(usize),
}

/// Placeholder for a board with no checkers.
const EMPTY_BOARD: &str = "-";

/// Formats `board` in compact notation.
pub fn format_board(board: &Board) -> String {
    let entries: Vec<String> = board
        .grids()
        .iter()
        .enumerate()
        .filter_map(|(pos, grid)| {
            let color = grid.color?;
            if grid.count == 0 {
                return None;
            }
            let count = char::from_digit(u32::from(grid.count), 16)?.to_ascii_uppercase();
            Some(format!("{}:{}{}", pos, color.notation_char(), count))
        })
        .collect();
    if entries.is_empty() {
        EMPTY_BOARD.to_string()
    } else {
        entries.join(" ")
    }
}

/// Parses a board from compact notation.
///
/// Only the syntax is checked; use [`Board::check_invariants`] to validate
/// the resulting position.
pub fn parse_board(input: &str) -> Result<Board, NotationError> {
    let input = input.trim();
    let mut board = Board::empty();
    if input == EMPTY_BOARD {
        return Ok(board);
    }

    let mut seen = [false; NUM_POSITIONS];
    for entry in input.split_whitespace() {
        let (pos, grid) = parse_entry(entry)?;
        if seen[pos] {
            return Err(NotationError::DuplicatePosition(pos));
        }
        seen[pos] = true;
        board.grids[pos] = grid;
    }
    Ok(board)
}

/// Parses one `<pos>:<color><count>` entry.
fn parse_entry(entry: &str) -> Result<(usize, Grid), NotationError> {
    let (pos_str, stack) = entry
        .split_once(':')
        .ok_or_else(|| NotationError::InvalidEntry(entry.to_string()))?;

    let pos: usize = pos_str
        .parse()
        .map_err(|_| NotationError::InvalidPosition(pos_str.to_string()))?;
    if pos >= NUM_POSITIONS {
        return Err(NotationError::InvalidPosition(pos_str.to_string()));
    }

    let mut chars = stack.chars();
    let color_char = chars
        .next()
        .ok_or_else(|| NotationError::InvalidEntry(entry.to_string()))?;
    let color = Color::from_notation_char(color_char)
        .ok_or(NotationError::InvalidColor(color_char))?;

    let count_str = chars.as_str();
    let count = parse_count(count_str)
        .ok_or_else(|| NotationError::InvalidCount(count_str.to_string()))?;

    Ok((pos, Grid::new(color, count)))
}

/// Parses a single uppercase hex digit in `1..=15`.
fn parse_count(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_ascii_lowercase() {
        return None;
    }
    let n = u8::try_from(c.to_digit(16)?).ok()?;
    (1..=NUM_CHECKERS).contains(&n).then_some(n)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BLACK_BAR, WHITE_BAR, WHITE_OFF};

    const START: &str = "1:B2 6:W5 8:W3 12:B5 13:W5 17:B3 19:B5 24:W2";

    #[test]
    fn format_start_position() {
        assert_eq!(format_board(&Board::new()), START);
        assert_eq!(Board::new().to_string(), START);
    }

    #[test]
    fn parse_start_position() {
        assert_eq!(parse_board(START).unwrap(), Board::new());
        assert_eq!(START.parse::<Board>().unwrap(), Board::new());
    }

    #[test]
    fn empty_board_is_dash() {
        assert_eq!(format_board(&Board::empty()), "-");
        assert_eq!(parse_board(" - ").unwrap(), Board::empty());
    }

    #[test]
    fn hex_counts_and_special_slots() {
        let board = Board::from_layout(&[
            (WHITE_OFF, Grid::new(Color::White, 12)),
            (WHITE_BAR, Grid::new(Color::White, 1)),
            (3, Grid::new(Color::White, 2)),
            (BLACK_BAR, Grid::new(Color::Black, 15)),
        ])
        .unwrap();
        let text = format_board(&board);
        assert_eq!(text, "0:BF 3:W2 25:W1 26:WC");
        assert_eq!(parse_board(&text).unwrap(), board);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_board("6W5"),
            Err(NotationError::InvalidEntry("6W5".to_string()))
        );
        assert_eq!(
            parse_board("28:W1"),
            Err(NotationError::InvalidPosition("28".to_string()))
        );
        assert_eq!(
            parse_board("x:W1"),
            Err(NotationError::InvalidPosition("x".to_string()))
        );
        assert_eq!(parse_board("6:R5"), Err(NotationError::InvalidColor('R')));
        assert_eq!(
            parse_board("6:W0"),
            Err(NotationError::InvalidCount("0".to_string()))
        );
        assert_eq!(
            parse_board("6:W10"),
            Err(NotationError::InvalidCount("10".to_string()))
        );
        assert_eq!(
            parse_board("6:Wa"),
            Err(NotationError::InvalidCount("a".to_string()))
        );
        assert_eq!(
            parse_board("6:"),
            Err(NotationError::InvalidEntry("6:".to_string()))
        );
        assert_eq!(
            parse_board("6:W5 6:W1"),
            Err(NotationError::DuplicatePosition(6))
        );
    }

    #[test]
    fn parse_skips_rule_checks() {
        let board = parse_board("5:W1").unwrap();
        assert_eq!(board.checker_count(Color::White), 1);
        assert!(board.check_invariants().is_err());
    }
}
