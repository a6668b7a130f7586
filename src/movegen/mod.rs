//! Legal move generation.
//!
//! Expands a dice roll into an [`ActionTree`] holding every legal sequence of
//! single-checker moves for one turn.

pub mod tree;

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, BOARD_MAX, BOARD_MIN, MAX_DIE};

pub use tree::{ActionNode, ActionTree};

/// Which sequences the generator keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Every sequence, including turns cut short by an unplayable die.
    #[default]
    Exhaustive,
    /// Only turns using the most dice, preferring the larger die when just
    /// one die of a non-double can be played.
    Maximal,
}

/// Configuration for move generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub policy: MovePolicy,
    /// Keep only the first turn reaching each distinct board in
    /// [`Board::legal_turns`].
    pub dedup_positions: bool,
}

/// Rolls two dice.
pub fn roll_dice(rng: &mut impl Rng) -> (u8, u8) {
    (rng.gen_range(1..=MAX_DIE), rng.gen_range(1..=MAX_DIE))
}

impl Board {
    /// Every legal turn for `color` rolling `roll1` and `roll2`, unpruned.
    pub fn actions(&self, color: Color, roll1: u8, roll2: u8) -> ActionTree {
        self.actions_with(color, roll1, roll2, &ActionConfig::default())
    }

    /// Like [`Board::actions`], filtered by `config.policy`.
    pub fn actions_with(
        &self,
        color: Color,
        roll1: u8,
        roll2: u8,
        config: &ActionConfig,
    ) -> ActionTree {
        let mut tree = ActionTree::new();
        if roll1 == roll2 {
            expand(self, color, &[roll1; 4], &mut tree.roots);
        } else {
            expand(self, color, &[roll1, roll2], &mut tree.roots);
            expand(self, color, &[roll2, roll1], &mut tree.roots);
        }
        if config.policy == MovePolicy::Maximal {
            tree.retain_maximal();
        }
        log::trace!(
            "{:?} {}-{}: {} turns, depth {}",
            color,
            roll1,
            roll2,
            tree.leaf_count(),
            tree.max_depth()
        );
        tree
    }

    /// Flattens the generated tree into complete turns, in visit order.
    ///
    /// With `config.dedup_positions` only the first turn reaching each
    /// distinct resulting board is kept. A forced pass yields one empty turn.
    pub fn legal_turns(
        &self,
        color: Color,
        roll1: u8,
        roll2: u8,
        config: &ActionConfig,
    ) -> Vec<Vec<Move>> {
        let tree = self.actions_with(color, roll1, roll2, config);
        if !config.dedup_positions {
            return tree.paths();
        }
        let mut seen: HashSet<Board> = HashSet::new();
        let mut turns = Vec::new();
        tree.visit(|path| {
            // Generated paths always replay.
            if let Ok(after) = self.play(color, path) {
                if seen.insert(after) {
                    turns.push(path.to_vec());
                }
            }
        });
        turns
    }
}

/// Appends to `out` every move playable with `dice[0]`, each with its
/// continuations for the remaining dice.
fn expand(board: &Board, color: Color, dice: &[u8], out: &mut Vec<ActionNode>) {
    let Some((&die, rest)) = dice.split_first() else {
        return;
    };
    for from in origins(board, color) {
        let Ok(to) = board.check_move_from(color, from, die) else {
            continue;
        };
        let mut next = board.clone();
        next.relocate(color, from, to);
        let mut node = ActionNode::new(Move::new(from, die, to));
        expand(&next, color, rest, &mut node.children);
        out.push(node);
    }
}

/// Origins worth trying: the bar alone while it is occupied.
fn origins(board: &Board, color: Color) -> std::ops::RangeInclusive<usize> {
    let bar = color.bar();
    if board.bar_count(color) > 0 {
        bar..=bar
    } else {
        BOARD_MIN..=BOARD_MAX
    }
}
