//! Turn rules, independent of game state bookkeeping.
//!
//! - `combos`: which sets of open tiles may be closed for a roll
//! - `dice`: when the player may choose to roll a single die
//!
//! Both are pure functions over the tile board so they can be reused by
//! the engine, the autoplay policies, and tests.

pub mod combos;
pub mod dice;

pub use combos::{combos_that_sum, has_combo};
pub use dice::{die_choice_available, resolve_die_count, HIGH_TILES};
