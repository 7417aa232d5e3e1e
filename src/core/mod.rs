//! Core types: configuration, tile board, dice RNG, errors.
//!
//! Everything here is independent of the turn rules; `rules` and `game`
//! build on these.

pub mod config;
pub mod error;
pub mod rng;
pub mod tiles;

pub use config::{GameConfig, DEFAULT_TILE_COUNT};
pub use error::{ConfigError, MoveError};
pub use rng::{DieCount, GameRng, DIE_FACES};
pub use tiles::{TileBoard, TileCombo};
