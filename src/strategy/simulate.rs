//! Autoplay: run games to completion under a policy.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng};
use crate::game::Game;

use super::policy::Policy;
use super::stats::{GameSummary, SimulationStats};

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    /// Master seed. Each game gets its own fork, so results are
    /// reproducible and independent of `game.seed`.
    pub seed: u64,

    /// Board and variant for every game.
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game configuration.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// Play `game` until it finishes.
///
/// Dice come from the game's own RNG; `rng` feeds the policy.
pub fn play_game(game: &mut Game, policy: &dyn Policy, rng: &mut GameRng) -> GameSummary {
    while !game.is_finished() {
        let dice = policy.choose_dice(game, rng);
        let roll = game.roll(None, dice);
        if game.is_finished() {
            break;
        }

        let moves = game.legal_moves(roll);
        let choice = policy.choose_move(game, roll, &moves, rng);
        let Some(combo) = moves.get(choice).or_else(|| moves.first()) else {
            break;
        };
        if !game.move_tiles(combo) {
            break;
        }
    }

    GameSummary {
        outcome: game.outcome(),
        score: game.score(),
        turns: game.history().len() as u32,
    }
}

/// Play `config.games` seeded games and aggregate the results.
pub fn simulate(config: &SimulationConfig, policy: &dyn Policy) -> SimulationStats {
    let mut master = GameRng::new(config.seed);
    let mut stats = SimulationStats::new();

    for index in 0..config.games {
        let dice_rng = master.fork();
        let mut policy_rng = dice_rng.for_context("policy");
        let mut game = Game::with_rng(
            config.game.tile_count,
            config.game.single_die_allowed,
            dice_rng,
        );

        let summary = play_game(&mut game, policy, &mut policy_rng);
        debug!("game {}: {:?} score {} in {} turns", index, summary.outcome, summary.score, summary.turns);
        stats.record(&summary);
    }

    info!(
        "{} games with {} policy: shut {:.2}%, mean score {:.2}",
        stats.games,
        policy.name(),
        stats.shut_rate() * 100.0,
        stats.mean_score()
    );

    stats
}
