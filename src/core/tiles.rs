//! Tile board: which numbered tiles are still open.
//!
//! Tiles are labeled `1..=tile_count`. The board is a bitset of `u64` words
//! where bit `(v - 1) % 64` of word `(v - 1) / 64` is set while tile `v` is
//! open, so membership tests are O(1) and a move closes tiles by clearing
//! bits. Tiles never reopen. A standard board fits in one word.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const WORD_BITS: i32 = 64;

/// One combination of tile values, ascending.
///
/// Inline capacity covers every combination on a standard nine-tile board
/// that can reach a two-dice total.
pub type TileCombo = SmallVec<[i32; 6]>;

/// Open/closed state for every tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileBoard {
    tile_count: i32,
    open: Vec<u64>,
}

impl TileBoard {
    /// Create a board with every tile open.
    ///
    /// A non-positive `tile_count` produces an empty board, which is already
    /// fully closed.
    #[must_use]
    pub fn new(tile_count: i32) -> Self {
        let tile_count = tile_count.max(0);
        let words = (tile_count + WORD_BITS - 1) / WORD_BITS;
        Self {
            tile_count,
            open: (0..words as usize).map(|w| word_mask(tile_count, w)).collect(),
        }
    }

    /// Number of tiles the board was created with.
    #[must_use]
    pub const fn tile_count(&self) -> i32 {
        self.tile_count
    }

    /// Is `tile` one of the board's labels?
    #[must_use]
    pub fn contains(&self, tile: i32) -> bool {
        (1..=self.tile_count).contains(&tile)
    }

    /// Is `tile` on the board and still open?
    #[must_use]
    pub fn is_open(&self, tile: i32) -> bool {
        self.bit(tile).is_some_and(|(word, bit)| self.open[word] & bit != 0)
    }

    /// Close a tile. Returns `true` if it was open.
    pub fn close(&mut self, tile: i32) -> bool {
        match self.bit(tile) {
            Some((word, bit)) if self.open[word] & bit != 0 => {
                self.open[word] &= !bit;
                true
            }
            _ => false,
        }
    }

    /// Open tile values, ascending.
    pub fn open_tiles(&self) -> impl Iterator<Item = i32> + '_ {
        tiles_in(self.open.iter().copied())
    }

    /// Closed tile values, ascending.
    pub fn closed_tiles(&self) -> impl Iterator<Item = i32> + '_ {
        let tile_count = self.tile_count;
        tiles_in(
            self.open
                .iter()
                .enumerate()
                .map(move |(w, &bits)| word_mask(tile_count, w) & !bits),
        )
    }

    /// Number of open tiles.
    #[must_use]
    pub fn open_count(&self) -> u32 {
        self.open.iter().map(|bits| bits.count_ones()).sum()
    }

    /// Sum of open tile values.
    #[must_use]
    pub fn open_sum(&self) -> i32 {
        self.open_tiles().sum()
    }

    /// True once every tile is closed (or the board was empty).
    #[must_use]
    pub fn all_closed(&self) -> bool {
        self.open.iter().all(|&bits| bits == 0)
    }

    fn bit(&self, tile: i32) -> Option<(usize, u64)> {
        self.contains(tile).then(|| {
            let index = tile - 1;
            ((index / WORD_BITS) as usize, 1u64 << (index % WORD_BITS))
        })
    }
}

/// Bits of word `w` that hold a tile on a board of `tile_count`.
fn word_mask(tile_count: i32, w: usize) -> u64 {
    match tile_count - w as i32 * WORD_BITS {
        n if n <= 0 => 0,
        n if n >= WORD_BITS => u64::MAX,
        n => (1u64 << n) - 1,
    }
}

fn tiles_in(words: impl Iterator<Item = u64>) -> impl Iterator<Item = i32> {
    words
        .enumerate()
        .flat_map(|(w, bits)| bits_ascending(bits).map(move |i| w as i32 * WORD_BITS + i))
}

fn bits_ascending(mut bits: u64) -> impl Iterator<Item = i32> {
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }
        let index = bits.trailing_zeros();
        bits &= bits - 1;
        Some(index as i32 + 1)
    })
}
