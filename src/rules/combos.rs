//! Subset-sum enumeration over open tiles.
//!
//! A legal move is any set of distinct open tiles whose values add up to the
//! roll. Enumeration is a backtracking search over the open tiles in
//! ascending order: each tile is either taken or skipped once, so every
//! subset is visited at most once and comes out ascending. Because tiles are
//! positive and ascending, a branch stops as soon as the next tile would
//! overshoot the target.

use crate::core::TileCombo;

/// All combinations of `tiles` that sum exactly to `target`.
///
/// `tiles` must be positive and strictly ascending (as produced by
/// `TileBoard::open_tiles`). Each combination is reported once, ascending,
/// in lexicographic order. Returns nothing for `target <= 0`.
#[must_use]
pub fn combos_that_sum(tiles: &[i32], target: i32) -> Vec<TileCombo> {
    let mut results = Vec::new();
    if target <= 0 {
        return results;
    }

    let mut combo = TileCombo::new();
    collect(tiles, 0, target, &mut combo, 0, &mut results);
    results
}

fn collect(
    tiles: &[i32],
    start: usize,
    target: i32,
    combo: &mut TileCombo,
    total: i32,
    out: &mut Vec<TileCombo>,
) {
    if total == target {
        out.push(combo.clone());
        return;
    }

    for (i, &tile) in tiles.iter().enumerate().skip(start) {
        if total + tile > target {
            break;
        }
        combo.push(tile);
        collect(tiles, i + 1, target, combo, total + tile, out);
        combo.pop();
    }
}

/// Does at least one combination of `tiles` sum to `target`?
///
/// Same search as [`combos_that_sum`], stopping at the first hit.
#[must_use]
pub fn has_combo(tiles: &[i32], target: i32) -> bool {
    target > 0 && reaches(tiles, target)
}

fn reaches(tiles: &[i32], remaining: i32) -> bool {
    if remaining == 0 {
        return true;
    }
    tiles
        .iter()
        .enumerate()
        .take_while(|&(_, &tile)| tile <= remaining)
        .any(|(i, &tile)| reaches(&tiles[i + 1..], remaining - tile))
}
