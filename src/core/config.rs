//! Game configuration.
//!
//! A `GameConfig` fixes the board size and the single-die variant before a
//! game starts. Neither can change once the game is created. Configs can be
//! built in code or loaded from JSON; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Standard number of tiles on the box.
pub const DEFAULT_TILE_COUNT: i32 = 9;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles are labeled `1..=tile_count`.
    /// Non-positive values make an empty board that is already finished.
    pub tile_count: i32,

    /// Allow rolling one die once the high tiles (7, 8, 9) are closed.
    pub single_die_allowed: bool,

    /// Seed for the dice RNG. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            single_die_allowed: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard nine-tile configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tiles.
    #[must_use]
    pub fn with_tile_count(mut self, tile_count: i32) -> Self {
        self.tile_count = tile_count;
        self
    }

    /// Enable or disable the single-die variant.
    #[must_use]
    pub fn with_single_die(mut self, allowed: bool) -> Self {
        self.single_die_allowed = allowed;
        self
    }

    /// Fix the dice seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
