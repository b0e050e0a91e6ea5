//! Game service: ties the bingo core to persistence.
//!
//! Every operation loads what it needs, runs the core logic, and saves the
//! result. Repository failures are returned as-is; nothing is retried.

pub mod repository;
pub mod memory;

pub use repository::{CardRepository, GameRepository};
pub use memory::{MemoryCardRepository, MemoryGameRepository};

use tracing::{debug, info};

use crate::cards::Card;
use crate::core::{BingoResult, GameId, GeneratorConfig, UserId};
use crate::game::{BulkCardScheduler, Game, WinningRows};

/// Application service over the game and card repositories.
pub struct GameService<G: GameRepository, C: CardRepository> {
    games: G,
    cards: C,
    scheduler: BulkCardScheduler,
}

impl<G: GameRepository, C: CardRepository> GameService<G, C> {
    /// Create a service with the default generator configuration.
    pub fn new(games: G, cards: C) -> Self {
        Self::with_config(games, cards, GeneratorConfig::default())
    }

    /// Create a service with an explicit generator configuration.
    pub fn with_config(games: G, cards: C, config: GeneratorConfig) -> Self {
        Self {
            games,
            cards,
            scheduler: BulkCardScheduler::new(config),
        }
    }

    /// The game repository.
    pub fn games(&self) -> &G {
        &self.games
    }

    /// The card repository.
    pub fn cards(&self) -> &C {
        &self.cards
    }

    /// Create and save a new game.
    pub fn create(&self, host_id: UserId, name: impl Into<String>) -> BingoResult<Game> {
        let mut game = Game::new(host_id, name);
        self.games.save(&mut game)?;
        info!(game_id = %game.id, %host_id, "game created");
        Ok(game)
    }

    /// Create a game and generate its first `amount` cards.
    pub fn create_with_cards(
        &self,
        host_id: UserId,
        name: impl Into<String>,
        amount: usize,
    ) -> BingoResult<(Game, Vec<Card>)> {
        let game = self.create(host_id, name)?;
        let cards = self.generate_cards(game.id, amount)?;
        let game = self.games.get(game.id)?;
        Ok((game, cards))
    }

    /// Generate, store and return `amount` new cards for a game.
    ///
    /// The game's card counter is saved only after the cards are stored.
    pub fn generate_cards(&self, game_id: GameId, amount: usize) -> BingoResult<Vec<Card>> {
        let mut game = self.games.get(game_id)?;

        let mut bulk = self.scheduler.generate(&game, amount);
        self.cards.save_all(&mut bulk.cards)?;

        game.commit_card_number(bulk.next_card_number);
        game.touch();
        self.games.save(&mut game)?;

        info!(%game_id, amount, next_card_number = bulk.next_card_number, "cards generated");
        Ok(bulk.cards)
    }

    /// Call a number in a game and save it.
    pub fn call_number(&self, game_id: GameId, number: u8) -> BingoResult<Game> {
        let mut game = self.games.get(game_id)?;
        game.call_number(number)?;
        game.touch();
        self.games.save(&mut game)?;

        debug!(%game_id, number, called = game.called_numbers().len(), "number called");
        Ok(game)
    }

    /// Rows of card `card_number` fully covered by the game's called numbers.
    pub fn match_winning_card_pattern(
        &self,
        card_number: u64,
        game_id: GameId,
    ) -> BingoResult<WinningRows> {
        let game = self.games.get(game_id)?;
        let card = self.cards.get_by_number(card_number, game_id)?;
        let rows = game.match_winning_rows(&card)?;

        debug!(%game_id, card_number, rows = ?rows.as_slice(), "card matched");
        Ok(rows)
    }
}
