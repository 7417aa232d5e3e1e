//! Error types for move validation and configuration.
//!
//! The engine reports rejected moves through `MoveError` rather than
//! panicking. `Game::move_tiles` collapses these to a boolean for callers that
//! only need accept/reject.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[error("game is already finished")]
    GameOver,

    /// No roll is waiting for a move.
    #[error("no roll is pending")]
    NoPendingRoll,

    /// A chosen tile is not on the board.
    #[error("tile {tile} is outside 1..={tile_count}")]
    TileOutOfRange { tile: i32, tile_count: i32 },

    /// A chosen tile was closed earlier.
    #[error("tile {0} is already closed")]
    TileClosed(i32),

    /// A tile appears more than once in the chosen set.
    #[error("tile {0} chosen more than once")]
    DuplicateTile(i32),

    /// The chosen tiles do not add up to the pending roll.
    #[error("chosen tiles sum to {sum}, roll was {roll}")]
    WrongSum { sum: i32, roll: i32 },
}

/// Unreadable game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration JSON failed to parse.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "game is already finished");
        assert_eq!(MoveError::TileClosed(3).to_string(), "tile 3 is already closed");
        assert_eq!(
            MoveError::WrongSum { sum: 5, roll: 7 }.to_string(),
            "chosen tiles sum to 5, roll was 7"
        );
        assert_eq!(
            MoveError::TileOutOfRange { tile: 12, tile_count: 9 }.to_string(),
            "tile 12 is outside 1..=9"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let config_err: ConfigError = err.into();
        assert!(matches!(config_err, ConfigError::Json(_)));
        assert!(config_err.to_string().starts_with("invalid configuration: "));
    }
}
