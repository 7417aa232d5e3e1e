//! Autoplay policies.
//!
//! A policy makes the two decisions a player has each turn:
//! - how many dice to request (only meaningful when the die choice is open)
//! - which legal combination to close for the roll

use std::cmp::Reverse;

use crate::core::{DieCount, GameRng, TileCombo};
use crate::game::Game;

/// Decision-maker for autoplay.
pub trait Policy: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Dice to request for the next roll.
    ///
    /// `None` takes the default. The engine ignores the request unless
    /// `game.die_choice_available()`.
    fn choose_dice(&self, game: &Game, rng: &mut GameRng) -> Option<DieCount>;

    /// Index into `moves` of the combination to close.
    ///
    /// `moves` is never empty.
    fn choose_move(&self, game: &Game, roll: i32, moves: &[TileCombo], rng: &mut GameRng) -> usize;
}

/// Uniformly random dice and moves.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_dice(&self, game: &Game, rng: &mut GameRng) -> Option<DieCount> {
        if !game.die_choice_available() {
            return None;
        }
        rng.choose(&[DieCount::One, DieCount::Two]).copied()
    }

    fn choose_move(&self, _game: &Game, _roll: i32, moves: &[TileCombo], rng: &mut GameRng) -> usize {
        rng.gen_range_usize(0..moves.len().max(1))
    }
}

/// Close as few tiles as possible, highest first.
///
/// Keeps small tiles around for later rolls. Switches to one die once the
/// remaining score fits on a single die.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_dice(&self, game: &Game, _rng: &mut GameRng) -> Option<DieCount> {
        if game.die_choice_available() && game.score() <= crate::core::DIE_FACES {
            Some(DieCount::One)
        } else {
            Some(DieCount::Two)
        }
    }

    fn choose_move(&self, _game: &Game, _roll: i32, moves: &[TileCombo], _rng: &mut GameRng) -> usize {
        moves
            .iter()
            .enumerate()
            .max_by_key(|(_, combo)| (Reverse(combo.len()), combo.last().copied()))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

/// Look up a built-in policy by name.
#[must_use]
pub fn policy_by_name(name: &str) -> Option<Box<dyn Policy>> {
    match name {
        "random" => Some(Box::new(RandomPolicy)),
        "greedy" => Some(Box::new(GreedyPolicy)),
        _ => None,
    }
}
