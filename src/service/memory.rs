//! In-memory repositories.
//!
//! Used by tests and by callers embedding the engine without a database.
//! Ids are handed out sequentially starting at 1.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use super::repository::{CardRepository, GameRepository};
use crate::cards::Card;
use crate::core::{BingoError, BingoResult, CardId, GameId};
use crate::game::Game;

fn lock<T>(mutex: &Mutex<T>) -> BingoResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| BingoError::Repository("in-memory store lock poisoned".to_string()))
}

/// Games keyed by id.
#[derive(Debug)]
pub struct MemoryGameRepository {
    games: Mutex<FxHashMap<GameId, Game>>,
    next_id: AtomicU64,
}

impl Default for MemoryGameRepository {
    fn default() -> Self {
        Self {
            games: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl MemoryGameRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> BingoResult<usize> {
        Ok(lock(&self.games)?.len())
    }

    /// Is the repository empty?
    pub fn is_empty(&self) -> BingoResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl GameRepository for MemoryGameRepository {
    fn save(&self, game: &mut Game) -> BingoResult<()> {
        let mut games = lock(&self.games)?;
        if !game.id.is_assigned() {
            game.id = GameId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        }
        games.insert(game.id, game.clone());
        Ok(())
    }

    fn get(&self, id: GameId) -> BingoResult<Game> {
        lock(&self.games)?
            .get(&id)
            .cloned()
            .ok_or(BingoError::GameNotFound(id))
    }
}

/// Cards keyed by `(game, number)`.
#[derive(Debug)]
pub struct MemoryCardRepository {
    cards: Mutex<FxHashMap<(GameId, u64), Card>>,
    next_id: AtomicU64,
}

impl Default for MemoryCardRepository {
    fn default() -> Self {
        Self {
            cards: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl MemoryCardRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cards across all games.
    pub fn len(&self) -> BingoResult<usize> {
        Ok(lock(&self.cards)?.len())
    }

    /// Is the repository empty?
    pub fn is_empty(&self) -> BingoResult<bool> {
        Ok(self.len()? == 0)
    }

    fn assign_id(&self, card: &mut Card) {
        if card.id.is_none() {
            card.id = Some(CardId::new(self.next_id.fetch_add(1, Ordering::Relaxed)));
        }
    }
}

fn number_taken(stored: &FxHashMap<(GameId, u64), Card>, card: &Card) -> bool {
    stored
        .get(&(card.game_id, card.number))
        .is_some_and(|existing| card.id.is_none() || existing.id != card.id)
}

impl CardRepository for MemoryCardRepository {
    fn save(&self, card: &mut Card) -> BingoResult<()> {
        let mut cards = lock(&self.cards)?;
        if number_taken(&cards, card) {
            return Err(BingoError::CardNumberExists {
                number: card.number,
                game: card.game_id,
            });
        }
        self.assign_id(card);
        cards.insert((card.game_id, card.number), card.clone());
        Ok(())
    }

    fn save_all(&self, batch: &mut [Card]) -> BingoResult<()> {
        let mut cards = lock(&self.cards)?;

        let mut keys: Vec<(GameId, u64)> =
            batch.iter().map(|card| (card.game_id, card.number)).collect();
        keys.sort_unstable();
        if let Some(pair) = keys.windows(2).find(|pair| pair[0] == pair[1]) {
            let (game, number) = pair[0];
            return Err(BingoError::CardNumberExists { number, game });
        }
        if let Some(card) = batch.iter().find(|card| number_taken(&cards, card)) {
            return Err(BingoError::CardNumberExists {
                number: card.number,
                game: card.game_id,
            });
        }

        for card in batch.iter_mut() {
            self.assign_id(card);
            cards.insert((card.game_id, card.number), card.clone());
        }
        Ok(())
    }

    fn get_by_number(&self, number: u64, game_id: GameId) -> BingoResult<Card> {
        lock(&self.cards)?
            .get(&(game_id, number))
            .cloned()
            .ok_or(BingoError::CardNotFound { number, game: game_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardRng, UserId};

    #[test]
    fn test_game_save_assigns_id_once() {
        let repo = MemoryGameRepository::new();
        let mut game = Game::new(UserId::new(1), "a");

        repo.save(&mut game).unwrap();
        let id = game.id;
        assert!(id.is_assigned());

        game.name = "b".to_string();
        repo.save(&mut game).unwrap();
        assert_eq!(game.id, id);
        assert_eq!(repo.get(id).unwrap().name, "b");
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_game_not_found() {
        let repo = MemoryGameRepository::new();
        assert_eq!(repo.get(GameId::new(3)), Err(BingoError::GameNotFound(GameId::new(3))));
    }

    #[test]
    fn test_card_save_and_lookup() {
        let repo = MemoryCardRepository::new();
        let mut card = Card::random(&mut CardRng::new(1), GameId::new(1), 4);

        repo.save(&mut card).unwrap();
        assert!(card.id.is_some());

        let loaded = repo.get_by_number(4, GameId::new(1)).unwrap();
        assert_eq!(loaded, card);

        assert_eq!(
            repo.get_by_number(4, GameId::new(2)),
            Err(BingoError::CardNotFound { number: 4, game: GameId::new(2) })
        );
    }

    #[test]
    fn test_card_update_keeps_number() {
        let repo = MemoryCardRepository::new();
        let mut card = Card::random(&mut CardRng::new(1), GameId::new(1), 4);
        repo.save(&mut card).unwrap();

        card.assign_player(crate::core::PlayerId::new(2));
        repo.save(&mut card).unwrap();

        assert_eq!(repo.len().unwrap(), 1);
        assert_eq!(
            repo.get_by_number(4, GameId::new(1)).unwrap().player_id,
            Some(crate::core::PlayerId::new(2))
        );
    }

    #[test]
    fn test_save_all_rejects_taken_number() {
        let repo = MemoryCardRepository::new();
        let mut rng = CardRng::new(1);
        let mut first = vec![Card::random(&mut rng, GameId::new(1), 1)];
        repo.save_all(&mut first).unwrap();

        let mut second = vec![
            Card::random(&mut rng, GameId::new(1), 2),
            Card::random(&mut rng, GameId::new(1), 1),
        ];
        assert_eq!(
            repo.save_all(&mut second),
            Err(BingoError::CardNumberExists { number: 1, game: GameId::new(1) })
        );
        assert_eq!(repo.len().unwrap(), 1);
        assert!(second.iter().all(|card| card.id.is_none()));
    }

    #[test]
    fn test_save_all_rejects_duplicates_within_batch() {
        let repo = MemoryCardRepository::new();
        let mut rng = CardRng::new(1);
        let mut batch = vec![
            Card::random(&mut rng, GameId::new(1), 7),
            Card::random(&mut rng, GameId::new(1), 7),
        ];

        assert!(repo.save_all(&mut batch).is_err());
        assert!(repo.is_empty().unwrap());
    }
}
