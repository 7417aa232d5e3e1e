//! Shut-the-box game engine.
//!
//! `Game` owns the tile board, the pending roll and the dice RNG, and
//! applies the turn rules from `rules`. Callers drive it with `roll` and
//! `move_tiles` and read everything else.

mod engine;

pub use engine::{Game, Outcome, Phase, Roll, TurnRecord};
