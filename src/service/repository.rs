//! Persistence seams.
//!
//! Storage format, retries and concurrency control live behind these traits.
//! Implementations report failures as `BingoError::Repository` (or one of the
//! lookup errors); callers pass them through untouched.

use crate::cards::Card;
use crate::core::{BingoResult, GameId};
use crate::game::Game;

/// Game storage.
pub trait GameRepository {
    /// Insert or update a game. Assigns `game.id` on first save.
    fn save(&self, game: &mut Game) -> BingoResult<()>;

    /// Load a game. Fails with `GameNotFound` on a miss.
    fn get(&self, id: GameId) -> BingoResult<Game>;
}

/// Card storage.
pub trait CardRepository {
    /// Insert or update a card. Assigns `card.id` on first save.
    fn save(&self, card: &mut Card) -> BingoResult<()>;

    /// Insert a batch of new cards, assigning their ids.
    ///
    /// Fails with `CardNumberExists` if any `(game, number)` pair is taken;
    /// nothing is stored in that case.
    fn save_all(&self, cards: &mut [Card]) -> BingoResult<()>;

    /// Load a card by its number within a game. Fails with `CardNotFound`.
    fn get_by_number(&self, number: u64, game_id: GameId) -> BingoResult<Card>;
}
