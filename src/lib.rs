//! # jackpot
//!
//! A shut-the-box tile elimination engine.
//!
//! Tiles `1..=n` start open. Each turn the player rolls two dice (or one,
//! once the high tiles are gone) and closes any set of open tiles that adds
//! up to the roll. The game ends when a roll cannot be matched or every tile
//! is closed; the score is the sum of the tiles left open.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Dice come from a seeded ChaCha8 RNG, and every roll
//!    can be forced to a given total for tests or physical dice.
//!
//! 2. **No Panics at the Boundary**: Illegal moves and out-of-turn calls are
//!    rejected through return values, never aborts.
//!
//! 3. **Presentation-Free**: The engine exposes state and two actions
//!    (`roll`, `move_tiles`). Rendering and input belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Configuration, tile board, dice RNG, errors
//! - `rules`: Subset-sum move enumeration and the die-count rule
//! - `game`: The `Game` engine and its turn phases
//! - `strategy`: Autoplay policies and batch simulation

pub mod core;
pub mod rules;
pub mod game;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DieCount, GameConfig, GameRng, MoveError, TileBoard,
    TileCombo,
};

pub use crate::rules::{combos_that_sum, die_choice_available};

pub use crate::game::{Game, Outcome, Phase, Roll, TurnRecord};

pub use crate::strategy::{
    play_game, simulate, GameSummary, GreedyPolicy, Policy, RandomPolicy,
    SimulationConfig, SimulationStats,
};
