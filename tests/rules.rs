//! Scenario tests for the public rules API.
//!
//! Each test sets up a concrete position and checks legality, generation,
//! and terminal detection through the library surface only.

use gammon::board::{BLACK_BAR, BLACK_OFF, NUM_POSITIONS, WHITE_BAR, WHITE_OFF};
use gammon::{
    ActionConfig, Board, Color, GameResult, Grid, Move, MoveError, MoveOutcome, MovePolicy, WinKind,
};

fn white(n: u8) -> Grid {
    Grid::new(Color::White, n)
}

fn black(n: u8) -> Grid {
    Grid::new(Color::Black, n)
}

fn board(layout: &[(usize, Grid)]) -> Board {
    let board = Board::from_layout(layout).unwrap();
    board.check_invariants().unwrap();
    board
}

// ---------------------------------------------------------------------------
// Opening
// ---------------------------------------------------------------------------

#[test]
fn opening_six_five_for_white() {
    let start = Board::new();
    let tree = start.actions(Color::White, 6, 5);
    let paths = tree.paths();

    assert!(paths.contains(&vec![Move::new(24, 6, 18), Move::new(13, 5, 8)]));
    for path in &paths {
        let sixes = path.iter().filter(|m| m.steps == 6).count();
        let fives = path.iter().filter(|m| m.steps == 5).count();
        assert_eq!(sixes + fives, path.len(), "foreign die in {:?}", path);
        assert!(sixes <= 1 && fives <= 1, "die reused in {:?}", path);
    }
}

#[test]
fn opening_doubles_use_one_value_four_times() {
    let start = Board::new();
    for die in 1..=6u8 {
        let tree = start.actions(Color::Black, die, die);
        tree.visit(|path| {
            assert!(path.len() <= 4);
            assert!(path.iter().all(|m| m.steps == die));
        });
    }
}

#[test]
fn every_generated_move_is_legal_in_sequence() {
    let start = Board::new();
    for (r1, r2) in [(6, 5), (3, 1), (4, 4), (2, 6)] {
        for color in [Color::White, Color::Black] {
            start.actions(color, r1, r2).visit(|path| {
                let mut b = start.clone();
                for mv in path {
                    assert!(b.can_move_from(color, mv.from, mv.steps), "{:?} {}", color, mv);
                    b.apply(color, mv).unwrap();
                }
                b.check_invariants().unwrap();
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Bar entry
// ---------------------------------------------------------------------------

#[test]
fn white_on_bar_enters_with_the_open_die() {
    let b = board(&[
        (WHITE_BAR, white(1)),
        (6, white(8)),
        (8, white(6)),
        (22, black(2)),
        (12, black(13)),
    ]);
    assert!(!b.can_move_from(Color::White, WHITE_BAR, 3));
    assert!(b.can_move_from(Color::White, WHITE_BAR, 4));
    assert!(!b.can_move_from(Color::White, 8, 4));

    let tree = b.actions(Color::White, 3, 4);
    assert!(!tree.is_empty());
    tree.visit(|path| {
        assert_eq!(path[0], Move::new(WHITE_BAR, 4, 21));
    });
}

#[test]
fn hitting_sends_blot_to_its_bar() {
    let mut b = board(&[(13, white(15)), (9, black(1)), (1, black(14))]);
    assert_eq!(b.move_checker(Color::White, 13, 9), Ok(MoveOutcome::Hit));
    assert_eq!(b.grid(9), Ok(white(1)));
    assert_eq!(b.grid(BLACK_BAR), Ok(black(1)));
    assert_eq!(b.check_invariants(), Ok(()));

    // Black must now enter before anything else.
    assert_eq!(b.move_checker(Color::Black, 1, 3), Err(MoveError::BarNeeded));
    assert_eq!(b.move_checker(Color::Black, BLACK_BAR, 3), Ok(MoveOutcome::Moved));
}

// ---------------------------------------------------------------------------
// Bearing off
// ---------------------------------------------------------------------------

#[test]
fn one_checker_outside_blocks_bear_off() {
    let b = board(&[
        (7, white(1)),
        (6, white(5)),
        (3, white(5)),
        (1, white(4)),
        (24, black(15)),
    ]);
    assert!(!b.can_bear_off(Color::White));
    assert_eq!(
        b.check_move_from(Color::White, 1, 1),
        Err(MoveError::CannotBearOff)
    );

    let mut home = b.clone();
    home.move_checker(Color::White, 7, 4).unwrap();
    assert!(home.can_bear_off(Color::White));
    assert!(!b.can_bear_off(Color::White));
}

#[test]
fn overshoot_requires_no_checker_behind() {
    let b = board(&[(5, white(1)), (2, white(14)), (24, black(15))]);
    assert_eq!(
        b.check_move_from(Color::White, 2, 6),
        Err(MoveError::CannotBearOff)
    );
    assert_eq!(b.check_move_from(Color::White, 5, 6), Ok(WHITE_OFF));
}

#[test]
fn bearing_off_last_checker_wins() {
    let b = board(&[
        (1, white(1)),
        (WHITE_OFF, white(14)),
        (BLACK_OFF, black(3)),
        (19, black(12)),
    ]);
    assert_eq!(b.winner(), None);
    let after = b.play(Color::White, &[Move::new(1, 1, WHITE_OFF)]).unwrap();
    assert_eq!(after.winner(), Some(Color::White));
    assert_eq!(
        after.result(),
        Some(GameResult { winner: Color::White, kind: WinKind::Single })
    );
}

// ---------------------------------------------------------------------------
// Policies and snapshots
// ---------------------------------------------------------------------------

#[test]
fn maximal_policy_never_keeps_short_turns() {
    let config = ActionConfig {
        policy: MovePolicy::Maximal,
        ..ActionConfig::default()
    };
    let positions = [
        Board::new(),
        board(&[(2, white(1)), (WHITE_OFF, white(14)), (19, black(15))]),
        board(&[
            (WHITE_BAR, white(1)),
            (6, white(14)),
            (22, black(2)),
            (1, black(13)),
        ]),
    ];
    for b in &positions {
        for (r1, r2) in [(6, 5), (5, 1), (3, 4), (2, 2)] {
            let full = b.actions(Color::White, r1, r2);
            let pruned = b.actions_with(Color::White, r1, r2, &config);
            let longest = full.max_depth();
            pruned.visit(|path| assert_eq!(path.len(), longest));
        }
    }
}

#[test]
fn snapshot_roundtrip_is_identical() {
    let mut source = Board::new();
    source.move_checker(Color::White, 24, 18).unwrap();
    let mut copy = Board::empty();
    for pos in 0..NUM_POSITIONS {
        copy.set_grid(pos, source.grid(pos).unwrap()).unwrap();
    }
    assert_eq!(copy, source);

    copy.move_checker(Color::Black, 1, 7).unwrap();
    assert_ne!(copy, source);
    assert_eq!(source.grid(1), Ok(black(2)));
}
