//! Die-count rule.
//!
//! Two dice are always rolled unless the game allows the single-die variant
//! and every high tile (7, 8, 9) that exists on the board is closed. Boards
//! smaller than seven tiles have no high tiles, so the rule is satisfied
//! from the start.

use crate::core::{DieCount, TileBoard};

/// Tiles that must be closed before a single die may be chosen.
pub const HIGH_TILES: [i32; 3] = [7, 8, 9];

/// Can the player choose between one and two dice?
#[must_use]
pub fn die_choice_available(board: &TileBoard, single_die_allowed: bool) -> bool {
    single_die_allowed
        && HIGH_TILES
            .iter()
            .filter(|&&tile| tile <= board.tile_count())
            .all(|&tile| !board.is_open(tile))
}

/// Die count actually used for a roll.
///
/// The request is honored only when the choice is available.
#[must_use]
pub fn resolve_die_count(choice_available: bool, requested: Option<DieCount>) -> DieCount {
    match requested {
        Some(dice) if choice_available => dice,
        _ => DieCount::Two,
    }
}
