//! Deterministic dice and policy randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice
//! - **Forkable**: Independent per-game streams for batch simulation
//! - **Context streams**: Keep dice and policy randomness apart
//!
//! ```
//! use jackpot::core::{DieCount, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let total = rng.roll_dice(DieCount::Two);
//! assert!((2..=12).contains(&total));
//!
//! // Same seed, same dice.
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_dice(DieCount::Two), total);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Faces on a standard die.
pub const DIE_FACES: i32 = 6;

/// How many dice a roll uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieCount {
    /// A single die, 1..=6.
    One,
    /// The standard pair, 2..=12.
    #[default]
    Two,
}

impl DieCount {
    /// Number of dice as an integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        match self {
            DieCount::One => 1,
            DieCount::Two => 2,
        }
    }
}

impl std::fmt::Display for DieCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieCount::One => write!(f, "1 die"),
            DieCount::Two => write!(f, "2 dice"),
        }
    }
}

/// Deterministic RNG for dice rolls and autoplay decisions.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Roll one fair die.
    pub fn roll_die(&mut self) -> i32 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll `dice` independent dice and return the total.
    pub fn roll_dice(&mut self, dice: DieCount) -> i32 {
        (0..dice.get()).map(|_| self.roll_die()).sum()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
