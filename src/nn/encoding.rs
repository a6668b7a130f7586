//! Board -> feature vector encoding for TD-Gammon style value networks.
//!
//! Produces a flat 198-unit f32 vector. Layout:
//!   [0:96]    white checkers on points 1..=24, 4 units per point
//!   [96]      white bar count / 2
//!   [97]      white off count / 15
//!   [98:194]  black checkers on points 1..=24, 4 units per point
//!   [194]     black bar count / 2
//!   [195]     black off count / 15
//!   [196:198] side to move: [1, 0] white, [0, 1] black
//!
//! Per point with `n` checkers: `n < 4` sets the first `n` units to 1.0;
//! otherwise the units are `1, 1, 1, (n - 3) / 2`.

use rayon::prelude::*;

use crate::board::{Board, Color, Move, BOARD_MAX, BOARD_MIN, NUM_CHECKERS};
use crate::movegen::ActionTree;
use crate::rules::MoveError;

/// Total number of units in the encoding.
pub const NUM_FEATURES: usize = 198;

/// Units per board point.
pub const UNITS_PER_POINT: usize = 4;

/// One encoded position.
pub type Features = [f32; NUM_FEATURES];

/// Feature offset constants.
const FEAT_WHITE_POINTS: usize = 0;
const FEAT_WHITE_BAR: usize = 96;
const FEAT_WHITE_OFF: usize = 97;
const FEAT_BLACK_POINTS: usize = 98;
const FEAT_BLACK_BAR: usize = 194;
const FEAT_BLACK_OFF: usize = 195;
const FEAT_WHITE_TURN: usize = 196;
const FEAT_BLACK_TURN: usize = 197;

/// Offsets of a color's point block, bar unit, and off unit.
#[inline]
fn color_offsets(color: Color) -> (usize, usize, usize) {
    match color {
        Color::White => (FEAT_WHITE_POINTS, FEAT_WHITE_BAR, FEAT_WHITE_OFF),
        Color::Black => (FEAT_BLACK_POINTS, FEAT_BLACK_BAR, FEAT_BLACK_OFF),
    }
}

/// First unit of `point` within a color block.
#[inline]
fn point_offset(point: usize) -> usize {
    (point - BOARD_MIN) * UNITS_PER_POINT
}

/// Writes the four units for a stack of `n` checkers.
fn set_point_units(features: &mut [f32], n: u8) {
    if n < 4 {
        for unit in features.iter_mut().take(usize::from(n)) {
            *unit = 1.0;
        }
    } else {
        features[0] = 1.0;
        features[1] = 1.0;
        features[2] = 1.0;
        features[3] = f32::from(n - 3) / 2.0;
    }
}

/// Encodes `board` with `to_move` as the side to move.
pub fn encode(board: &Board, to_move: Color) -> Features {
    let mut features = [0.0f32; NUM_FEATURES];

    for point in BOARD_MIN..=BOARD_MAX {
        let grid = board.grids[point];
        let Some(owner) = grid.color else {
            continue;
        };
        let (block, _, _) = color_offsets(owner);
        let start = block + point_offset(point);
        set_point_units(&mut features[start..start + UNITS_PER_POINT], grid.count);
    }

    for color in [Color::White, Color::Black] {
        let (_, bar, off) = color_offsets(color);
        features[bar] = f32::from(board.bar_count(color)) / 2.0;
        features[off] = f32::from(board.off_count(color)) / f32::from(NUM_CHECKERS);
    }

    let turn = match to_move {
        Color::White => FEAT_WHITE_TURN,
        Color::Black => FEAT_BLACK_TURN,
    };
    features[turn] = 1.0;

    features
}

/// Plays `moves` for `color` on a scratch copy and encodes the result with
/// the opponent to move.
pub fn encode_moves(board: &Board, color: Color, moves: &[Move]) -> Result<Features, MoveError> {
    let after = board.play(color, moves)?;
    Ok(encode(&after, color.opponent()))
}

/// Swaps the two sides of an encoding in place, as if the board were seen
/// from the other color. Applying it twice restores the input.
pub fn reverse_features(features: &mut Features) {
    for point in BOARD_MIN..=BOARD_MAX {
        let white = FEAT_WHITE_POINTS + point_offset(point);
        let black = FEAT_BLACK_POINTS + point_offset(BOARD_MAX + 1 - point);
        for k in 0..UNITS_PER_POINT {
            features.swap(white + k, black + k);
        }
    }
    features.swap(FEAT_WHITE_BAR, FEAT_BLACK_BAR);
    features.swap(FEAT_WHITE_OFF, FEAT_BLACK_OFF);
    features.swap(FEAT_WHITE_TURN, FEAT_BLACK_TURN);
}

/// Encodes the position after every turn in `tree`, in visit order.
///
/// Turns are replayed in parallel, each on its own clone of `board`. A turn
/// that does not replay on `board` is skipped.
pub fn encode_actions(
    board: &Board,
    color: Color,
    tree: &ActionTree,
) -> Vec<(Vec<Move>, Features)> {
    tree.paths()
        .into_par_iter()
        .filter_map(|path| {
            let features = encode_moves(board, color, &path).ok()?;
            Some((path, features))
        })
        .collect()
}
