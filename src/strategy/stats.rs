//! Aggregate results over many simulated games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::Outcome;

/// Result of one autoplayed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// How the game ended. `None` only if autoplay stopped early.
    pub outcome: Option<Outcome>,

    /// Sum of tiles left open.
    pub score: i32,

    /// Moves made.
    pub turns: u32,
}

impl GameSummary {
    /// Was the box shut?
    #[must_use]
    pub fn is_shut(&self) -> bool {
        self.outcome == Some(Outcome::Shut)
    }
}

/// Statistics collected over a batch of games.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: u32,

    /// Games that ended with every tile closed.
    pub shut: u32,

    /// Sum of final scores.
    pub total_score: i64,

    /// Sum of moves made.
    pub total_turns: u64,

    /// Lowest final score seen.
    pub best_score: Option<i32>,

    /// Highest final score seen.
    pub worst_score: Option<i32>,

    /// Final score -> number of games.
    pub score_histogram: FxHashMap<i32, u32>,
}

impl SimulationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one game.
    pub fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        if summary.is_shut() {
            self.shut += 1;
        }
        self.total_score += i64::from(summary.score);
        self.total_turns += u64::from(summary.turns);
        self.best_score = Some(self.best_score.map_or(summary.score, |best| best.min(summary.score)));
        self.worst_score = Some(self.worst_score.map_or(summary.score, |worst| worst.max(summary.score)));
        *self.score_histogram.entry(summary.score).or_insert(0) += 1;
    }

    /// Fraction of games that shut the box.
    #[must_use]
    pub fn shut_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.shut as f64 / self.games as f64
        }
    }

    /// Average final score.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games as f64
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }

    /// Histogram entries ordered by score.
    #[must_use]
    pub fn sorted_histogram(&self) -> Vec<(i32, u32)> {
        let mut entries: Vec<_> = self.score_histogram.iter().map(|(&s, &n)| (s, n)).collect();
        entries.sort_unstable();
        entries
    }
}
