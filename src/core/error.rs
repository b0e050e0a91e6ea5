//! Error types for bingo operations.

use thiserror::Error;

use super::ids::GameId;
use crate::cards::LayoutViolation;

/// Every failure the crate can report.
///
/// Domain conflicts (`CalledNumberExists`, `CardDoesNotBelongToGame`) are
/// local and recoverable. `Repository` wraps whatever the persistence
/// collaborator reported; it is passed through, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    /// Ball number outside 1-90
    #[error("ball number {0} is outside 1-90")]
    BallOutOfRange(i64),

    /// Number was already called in this game
    #[error("number {0} has already been called")]
    CalledNumberExists(u8),

    /// Card was generated for another game
    #[error("card belongs to {card_game}, not {game}")]
    CardDoesNotBelongToGame { card_game: GameId, game: GameId },

    /// No game stored under this id
    #[error("{0} could not be found")]
    GameNotFound(GameId),

    /// No card with this number in the game
    #[error("card number {number} could not be found in {game}")]
    CardNotFound { number: u64, game: GameId },

    /// Card number already taken in the game
    #[error("card number {number} already exists in {game}")]
    CardNumberExists { number: u64, game: GameId },

    /// Card grid breaks a layout rule
    #[error("invalid card: {0}")]
    InvalidCard(#[from] LayoutViolation),

    /// Persistence collaborator failure
    #[error("repository error: {0}")]
    Repository(String),
}

/// Result type alias for bingo operations
pub type BingoResult<T> = Result<T, BingoError>;
