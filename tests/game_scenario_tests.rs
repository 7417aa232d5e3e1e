//! End-to-end game scenarios driven with forced rolls.

use jackpot::core::{DieCount, GameRng, MoveError};
use jackpot::game::{Game, Outcome, Phase};

fn seeded(tile_count: i32) -> Game {
    Game::with_rng(tile_count, true, GameRng::new(42))
}

/// Close each tile with a forced roll of its own value.
fn close_singly(game: &mut Game, tiles: &[i32]) {
    for &tile in tiles {
        assert_eq!(game.roll(Some(tile), None), tile);
        assert!(game.move_tiles(&[tile]), "closing {tile}");
    }
}

fn as_vecs(game: &Game, target: i32) -> Vec<Vec<i32>> {
    game.legal_moves(target).iter().map(|c| c.to_vec()).collect()
}

// =============================================================================
// Basic turns
// =============================================================================

#[test]
fn test_roll_one_close_one() {
    let mut game = seeded(9);

    assert_eq!(game.roll(Some(1), None), 1);
    assert_eq!(as_vecs(&game, 1), vec![vec![1]]);
    assert_eq!(game.pending_roll(), Some(1));

    assert!(game.move_tiles(&[1]));
    assert!(!game.is_open(1));
    assert_eq!(game.pending_roll(), None);
    assert_eq!(game.phase(), Phase::AwaitingRoll);
    assert!(!game.is_finished());
}

#[test]
fn test_move_order_does_not_matter() {
    let mut game = seeded(9);
    game.roll(Some(10), None);
    assert!(game.move_tiles(&[4, 1, 5]));
    assert_eq!(game.closed_tiles(), vec![1, 4, 5]);
}

#[test]
fn test_move_with_closed_tile_rejected() {
    let mut game = seeded(9);
    close_singly(&mut game, &[3]);

    game.roll(Some(5), None);
    let open_before = game.open_tiles();

    assert!(!game.move_tiles(&[2, 3]));
    assert_eq!(game.try_move(&[2, 3]), Err(MoveError::TileClosed(3)));

    assert_eq!(game.open_tiles(), open_before);
    assert_eq!(game.pending_roll(), Some(5));

    // Another combination still works
    assert!(game.move_tiles(&[1, 4]));
}

#[test]
fn test_illegal_move_keeps_awaiting_move() {
    let mut game = seeded(9);
    game.roll(Some(8), None);

    assert!(!game.move_tiles(&[7]));
    assert!(!game.move_tiles(&[4, 4]));
    assert!(!game.move_tiles(&[11]));
    assert!(!game.move_tiles(&[]));

    assert_eq!(game.phase(), Phase::AwaitingMove { roll: 8 });
    assert_eq!(game.score(), 45);
}

// =============================================================================
// Die choice
// =============================================================================

#[test]
fn test_single_die_after_high_tiles_closed() {
    let mut game = seeded(9);
    assert!(!game.die_choice_available());

    close_singly(&mut game, &[7, 8]);
    assert!(!game.die_choice_available());

    close_singly(&mut game, &[9]);
    assert!(game.die_choice_available());

    // Open tiles 1..=6 can match any total from 1 to 12, so rerolling
    // never ends the game here.
    for _ in 0..200 {
        let total = game.roll(None, Some(DieCount::One));
        assert!((1..=6).contains(&total), "one die rolled {total}");
        assert_eq!(game.last_roll().unwrap().dice, DieCount::One);
    }

    let mut saw_above_six = false;
    for _ in 0..200 {
        let total = game.roll(None, Some(DieCount::Two));
        assert!((2..=12).contains(&total));
        saw_above_six |= total > 6;
    }
    assert!(saw_above_six);

    // Default stays at two dice even when the choice is open
    game.roll(None, None);
    assert_eq!(game.last_roll().unwrap().dice, DieCount::Two);
}

#[test]
fn test_single_die_disabled() {
    let mut game = Game::with_rng(9, false, GameRng::new(1));
    close_singly(&mut game, &[7, 8, 9]);

    assert!(!game.die_choice_available());
    game.roll(None, Some(DieCount::One));
    assert_eq!(game.last_roll().unwrap().dice, DieCount::Two);
}

// =============================================================================
// Endings
// =============================================================================

#[test]
fn test_last_tile_wins() {
    let mut game = seeded(9);
    close_singly(&mut game, &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(game.open_tiles(), vec![9]);

    game.roll(Some(9), None);
    assert!(as_vecs(&game, 9).contains(&vec![9]));
    assert!(game.move_tiles(&[9]));

    assert!(game.is_finished());
    assert_eq!(game.outcome(), Some(Outcome::Shut));
    assert_eq!(game.score(), 0);
    assert_eq!(game.history().len(), 9);

    // Rolling after a win reports no roll
    assert_eq!(game.roll(None, None), 0);
    assert_eq!(game.roll(Some(9), None), 0);
    assert_eq!(game.outcome(), Some(Outcome::Shut));
}

#[test]
fn test_unreachable_roll_ends_game() {
    let mut game = seeded(9);

    assert!(game.legal_moves(46).is_empty());
    assert_eq!(game.roll(Some(46), None), 46);

    assert!(game.is_finished());
    assert_eq!(game.outcome(), Some(Outcome::Stuck { roll: 46 }));
    assert!(!game.move_tiles(&[1]));
    assert_eq!(game.try_move(&[9]), Err(MoveError::GameOver));
}

#[test]
fn test_stuck_mid_game() {
    let mut game = seeded(9);
    close_singly(&mut game, &[1, 2]);

    // 3 can still be matched by tile 3
    game.roll(Some(3), None);
    assert!(game.move_tiles(&[3]));

    // Nothing left sums to 2
    game.roll(Some(2), None);
    assert_eq!(game.outcome(), Some(Outcome::Stuck { roll: 2 }));
    assert_eq!(game.score(), 39);
}

#[test]
fn test_finished_game_is_frozen() {
    let mut game = seeded(9);
    close_singly(&mut game, &[5]);
    game.roll(Some(100), None);
    assert!(game.is_finished());

    let open = game.open_tiles();
    let history = game.history().to_vec();

    for forced in [None, Some(1), Some(4), Some(100)] {
        assert_eq!(game.roll(forced, Some(DieCount::One)), 100);
        assert!(!game.move_tiles(&[1]));
        assert!(!game.move_tiles(&[4]));
        assert!(game.is_finished());
        assert_eq!(game.open_tiles(), open);
        assert_eq!(game.history(), history.as_slice());
    }
}

#[test]
fn test_empty_board_already_finished() {
    let mut game = seeded(0);
    assert!(game.is_finished());
    assert_eq!(game.outcome(), Some(Outcome::Shut));
    assert_eq!(game.roll(None, None), 0);
    assert!(game.legal_moves(3).is_empty());
}

// =============================================================================
// Non-standard boards
// =============================================================================

#[test]
fn test_twelve_tile_board() {
    let mut game = seeded(12);
    assert_eq!(game.score(), 78);

    game.roll(Some(12), None);
    assert!(as_vecs(&game, 12).contains(&vec![12]));
    assert!(game.move_tiles(&[12]));

    // High tiles are only 7, 8, 9 even on a larger board
    close_singly(&mut game, &[7, 8, 9]);
    assert!(game.die_choice_available());
    assert!(game.is_open(10));
}

#[test]
fn test_board_wider_than_sixty_four_tiles() {
    let mut game = seeded(70);
    assert_eq!(game.score(), 70 * 71 / 2);

    game.roll(Some(135), None);
    assert!(game.move_tiles(&[65, 70]));
    assert_eq!(game.closed_tiles(), vec![65, 70]);
    assert!(game.is_open(66));

    assert!(!game.move_tiles(&[71]));
    game.roll(Some(69), None);
    assert_eq!(game.try_move(&[71]), Err(MoveError::TileOutOfRange { tile: 71, tile_count: 70 }));
    assert!(game.move_tiles(&[69]));
}

#[test]
fn test_small_board_choice_is_immediate() {
    let game = seeded(4);
    assert!(game.die_choice_available());
}
