//! Autoplay policies and batch simulation.
//!
//! ## Usage
//!
//! ```rust
//! use jackpot::strategy::{simulate, GreedyPolicy, SimulationConfig};
//!
//! let config = SimulationConfig::new().with_games(100).with_seed(7);
//! let stats = simulate(&config, &GreedyPolicy);
//!
//! assert_eq!(stats.games, 100);
//! println!("shut the box in {:.1}% of games", stats.shut_rate() * 100.0);
//! ```

pub mod policy;
pub mod simulate;
pub mod stats;

pub use policy::{policy_by_name, GreedyPolicy, Policy, RandomPolicy};
pub use simulate::{play_game, simulate, SimulationConfig};
pub use stats::{GameSummary, SimulationStats};
