//! # bingo-box
//!
//! 90-ball bingo: card generation, the called-number ledger, and winning
//! row detection.
//!
//! ## Design Principles
//!
//! 1. **Valid by Construction**: Every generated card has 15 numbers, 5 per
//!    row, 1 to 3 per column, column ranges respected, columns ascending.
//!
//! 2. **Parallel Without Shared State**: Bulk generation runs one worker per
//!    core, each with its own forked RNG stream. Card numbers stay
//!    contiguous and ordered regardless of completion order.
//!
//! 3. **Deterministic**: A seed (and worker count) reproduces the same cards.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors
//! - `cards`: Grid layout generation and the `Card` aggregate
//! - `game`: Balls, the `Game` aggregate, bulk scheduling, win matching
//! - `service`: Repository traits, in-memory repositories, `GameService`
//!
//! ## Quick start
//!
//! ```
//! use bingo_box::{Game, GameId, GeneratorConfig, UserId};
//!
//! let mut game = Game::new(UserId::new(1), "friday night");
//! game.id = GameId::new(1);
//!
//! let bulk = game.generate_bulk_random_cards(100, &GeneratorConfig::new().with_seed(7));
//! assert_eq!(bulk.cards.len(), 100);
//! game.commit_card_number(bulk.next_card_number);
//!
//! let card = &bulk.cards[0];
//! for n in card.row_numbers(2) {
//!     game.call_number(n).unwrap();
//! }
//! assert_eq!(game.match_winning_rows(card).unwrap().as_slice(), &[2]);
//! ```

pub mod core;
pub mod cards;
pub mod game;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    BingoError, BingoResult,
    CardId, GameId, PlayerId, UserId,
    CardRng,
    GeneratorConfig,
};

pub use crate::cards::{Card, CardGridNumber, CardMatrix, LayoutViolation};

pub use crate::game::{Ball, BulkCardScheduler, BulkCards, Game, WinningRows};

pub use crate::service::{
    CardRepository, GameRepository, GameService,
    MemoryCardRepository, MemoryGameRepository,
};
