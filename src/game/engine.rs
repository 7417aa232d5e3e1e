//! The game engine: roll, close tiles, repeat until stuck or shut.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    DieCount, GameConfig, GameRng, MoveError, TileBoard, TileCombo, DEFAULT_TILE_COUNT,
};
use crate::rules::{combos_that_sum, die_choice_available, has_combo, resolve_die_count};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every tile was closed.
    Shut,
    /// A roll left no combination of open tiles to close.
    Stuck {
        /// The roll that could not be matched.
        roll: i32,
    },
}

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to roll.
    AwaitingRoll,
    /// A roll is pending and at least one legal move exists for it.
    AwaitingMove {
        /// Total of the pending roll.
        roll: i32,
    },
    /// Terminal. Only reads are meaningful from here on.
    Finished(Outcome),
}

/// A single roll of the dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// Roll total.
    pub total: i32,
    /// Dice in effect for the roll.
    pub dice: DieCount,
    /// The total was supplied by the caller instead of rolled.
    pub forced: bool,
}

/// One completed turn: a roll and the tiles it closed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The roll that was matched.
    pub roll: Roll,
    /// Tiles closed, ascending.
    pub closed: TileCombo,
}

/// A single-player shut-the-box game.
///
/// Tiles `1..=tile_count` start open. Each turn the player rolls and then
/// closes a set of open tiles whose values add up to the roll. The game ends
/// when a roll cannot be matched (`Outcome::Stuck`) or the last tile is
/// closed (`Outcome::Shut`).
///
/// ## Example
///
/// ```
/// use jackpot::game::{Game, Outcome};
///
/// let mut game = Game::new(9, true);
///
/// let roll = game.roll(Some(7), None);
/// assert_eq!(roll, 7);
/// assert!(game.legal_moves(7).iter().any(|m| m.as_slice() == [3, 4]));
///
/// assert!(game.move_tiles(&[4, 3]));
/// assert_eq!(game.open_tiles(), vec![1, 2, 5, 6, 7, 8, 9]);
/// assert_eq!(game.score(), 38);
///
/// // 46 is more than every open tile together
/// game.roll(Some(46), None);
/// assert_eq!(game.outcome(), Some(Outcome::Stuck { roll: 46 }));
/// ```
///
/// Rejected operations never panic: `roll` after the end is a no-op and
/// `move_tiles` returns `false` (use `try_move` for the reason).
#[derive(Clone, Debug)]
pub struct Game {
    board: TileBoard,
    single_die_allowed: bool,
    phase: Phase,
    last_roll: Option<Roll>,
    history: Vec<TurnRecord>,
    rng: GameRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_COUNT, true)
    }
}

impl Game {
    /// Create a game with dice seeded from entropy.
    ///
    /// A non-positive `tile_count` gives an empty board; the game starts
    /// finished with `Outcome::Shut`.
    #[must_use]
    pub fn new(tile_count: i32, single_die_allowed: bool) -> Self {
        Self::with_rng(tile_count, single_die_allowed, GameRng::from_entropy())
    }

    /// Create a game rolling dice from the given RNG.
    #[must_use]
    pub fn with_rng(tile_count: i32, single_die_allowed: bool, rng: GameRng) -> Self {
        let board = TileBoard::new(tile_count);
        let phase = if board.all_closed() {
            Phase::Finished(Outcome::Shut)
        } else {
            Phase::AwaitingRoll
        };

        Self {
            board,
            single_die_allowed,
            phase,
            last_roll: None,
            history: Vec::new(),
            rng,
        }
    }

    /// Create a game from a configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config.tile_count, config.single_die_allowed, rng)
    }

    // === Reads ===

    /// Number of tiles the game was created with.
    #[must_use]
    pub fn tile_count(&self) -> i32 {
        self.board.tile_count()
    }

    /// Is the single-die variant enabled?
    #[must_use]
    pub fn single_die_allowed(&self) -> bool {
        self.single_die_allowed
    }

    /// The tile board.
    #[must_use]
    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    /// Is `tile` on the board and still open?
    #[must_use]
    pub fn is_open(&self, tile: i32) -> bool {
        self.board.is_open(tile)
    }

    /// Open tile values, ascending.
    #[must_use]
    pub fn open_tiles(&self) -> Vec<i32> {
        self.board.open_tiles().collect()
    }

    /// Closed tile values, ascending.
    #[must_use]
    pub fn closed_tiles(&self) -> Vec<i32> {
        self.board.closed_tiles().collect()
    }

    /// Sum of the open tiles. Lower is better; zero means the box is shut.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.board.open_sum()
    }

    /// May the next roll use one die instead of two?
    ///
    /// True when the single-die variant is enabled and every tile among
    /// 7, 8 and 9 that exists on the board is closed.
    #[must_use]
    pub fn die_choice_available(&self) -> bool {
        die_choice_available(&self.board, self.single_die_allowed)
    }

    /// Every set of open tiles summing to `target`, each ascending.
    #[must_use]
    pub fn legal_moves(&self, target: i32) -> Vec<TileCombo> {
        combos_that_sum(&self.open_tiles(), target)
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Roll total waiting for a move.
    #[must_use]
    pub fn pending_roll(&self) -> Option<i32> {
        match self.phase {
            Phase::AwaitingMove { roll } => Some(roll),
            _ => None,
        }
    }

    /// Most recent roll, including one already consumed by a move.
    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    // === Actions ===

    /// Roll the dice and return the total.
    ///
    /// `forced` replaces the random total (tests, physical dice). `dice` is
    /// honored only when [`Game::die_choice_available`]; otherwise two dice
    /// are rolled. A new roll replaces any pending one. If no combination of
    /// open tiles matches the total, the game ends stuck.
    ///
    /// Once the game is finished this does nothing. It returns the roll
    /// that left the game stuck, or 0 when the box was shut (the winning
    /// roll was consumed by its move).
    pub fn roll(&mut self, forced: Option<i32>, dice: Option<DieCount>) -> i32 {
        match self.phase {
            Phase::Finished(Outcome::Stuck { roll }) => return roll,
            Phase::Finished(Outcome::Shut) => return 0,
            _ => {}
        }

        let dice = resolve_die_count(self.die_choice_available(), dice);
        let total = forced.unwrap_or_else(|| self.rng.roll_dice(dice));
        self.last_roll = Some(Roll {
            total,
            dice,
            forced: forced.is_some(),
        });

        if has_combo(&self.open_tiles(), total) {
            debug!("rolled {} with {}", total, dice);
            self.phase = Phase::AwaitingMove { roll: total };
        } else {
            debug!("rolled {} with {}: no legal move, score {}", total, dice, self.score());
            self.phase = Phase::Finished(Outcome::Stuck { roll: total });
        }

        total
    }

    /// Close `chosen` tiles for the pending roll.
    ///
    /// Returns `false` and leaves the game untouched if the game is over,
    /// nothing is pending, or `chosen` is not one of
    /// `legal_moves(pending_roll)`. Order of `chosen` does not matter.
    pub fn move_tiles(&mut self, chosen: &[i32]) -> bool {
        match self.try_move(chosen) {
            Ok(()) => true,
            Err(err) => {
                trace!("rejected move {:?}: {}", chosen, err);
                false
            }
        }
    }

    /// Like [`Game::move_tiles`], reporting why a move was rejected.
    pub fn try_move(&mut self, chosen: &[i32]) -> Result<(), MoveError> {
        let roll = match self.phase {
            Phase::Finished(_) => return Err(MoveError::GameOver),
            Phase::AwaitingRoll => return Err(MoveError::NoPendingRoll),
            Phase::AwaitingMove { roll } => roll,
        };

        let combo = self.check_move(chosen, roll)?;
        debug_assert!(self.legal_moves(roll).contains(&combo));

        for &tile in &combo {
            self.board.close(tile);
        }
        debug!("closed {:?} for {}, score {}", combo.as_slice(), roll, self.score());

        if let Some(last) = self.last_roll {
            self.history.push(TurnRecord {
                roll: last,
                closed: combo,
            });
        }

        self.phase = if self.board.all_closed() {
            debug!("box shut after {} turns", self.history.len());
            Phase::Finished(Outcome::Shut)
        } else {
            Phase::AwaitingRoll
        };

        Ok(())
    }

    /// Normalize `chosen` and check it is a set of distinct open tiles
    /// summing to `roll`, which is exactly membership in `legal_moves(roll)`.
    fn check_move(&self, chosen: &[i32], roll: i32) -> Result<TileCombo, MoveError> {
        let mut combo: TileCombo = chosen.iter().copied().collect();
        combo.sort_unstable();

        for (i, &tile) in combo.iter().enumerate() {
            if !self.board.contains(tile) {
                return Err(MoveError::TileOutOfRange {
                    tile,
                    tile_count: self.board.tile_count(),
                });
            }
            if i > 0 && combo[i - 1] == tile {
                return Err(MoveError::DuplicateTile(tile));
            }
            if !self.board.is_open(tile) {
                return Err(MoveError::TileClosed(tile));
            }
        }

        let sum: i32 = combo.iter().sum();
        if sum != roll {
            return Err(MoveError::WrongSum { sum, roll });
        }

        Ok(combo)
    }
}
