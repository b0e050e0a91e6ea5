//! The `Game` aggregate: card numbering and the call ledger.
//!
//! ## Call Ledger
//!
//! `called_numbers` records every ball in call order. A number can be called
//! once; re-calling it is rejected without touching the ledger. Matching
//! treats the ledger as a set, but the order is kept for display and audit.
//!
//! The ledger is an `im::Vector`; cloning a loaded game shares it. A stored
//! ledger that repeats a ball is rejected when the game is deserialized.
//!
//! ## Card Numbering
//!
//! `next_card_number` starts at 1 and only grows. Single cards take the
//! current number; bulk generation reserves a whole run at once and the
//! caller commits the returned next number back.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::ball::{Ball, MAX_BALL};
use super::bulk::{BulkCardScheduler, BulkCards};
use super::matcher::{match_winning_rows, WinningRows};
use crate::cards::Card;
use crate::core::{BingoError, BingoResult, CardRng, GameId, GeneratorConfig, UserId};

/// A bingo game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Storage id. `GameId::UNASSIGNED` until saved.
    #[serde(default)]
    pub id: GameId,

    pub name: String,

    /// Hosting user, who also owns the game.
    pub host_id: UserId,

    next_card_number: u64,

    #[serde(deserialize_with = "deserialize_ledger")]
    called_numbers: Vector<Ball>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Create an unsaved game. Card numbering starts at 1.
    pub fn new(host_id: UserId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::UNASSIGNED,
            name: name.into(),
            host_id,
            next_card_number: 1,
            called_numbers: Vector::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Number the next generated card will get.
    #[must_use]
    pub fn next_card_number(&self) -> u64 {
        self.next_card_number
    }

    /// Move the card counter forward to `next`.
    ///
    /// The counter never moves backwards; a lower value is ignored.
    pub fn commit_card_number(&mut self, next: u64) {
        self.next_card_number = self.next_card_number.max(next);
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // === Call Ledger ===

    /// Called balls in call order.
    #[must_use]
    pub fn called_numbers(&self) -> &Vector<Ball> {
        &self.called_numbers
    }

    /// Has `number` been called?
    #[must_use]
    pub fn is_called(&self, number: u8) -> bool {
        self.called_numbers.iter().any(|ball| ball.number() == number)
    }

    /// Record a called number.
    ///
    /// Fails with `CalledNumberExists` if it was called before, and with
    /// `BallOutOfRange` outside 1-90. The ledger is untouched on failure.
    pub fn call_number(&mut self, number: u8) -> BingoResult<Ball> {
        let ball = Ball::new(number)?;
        if self.is_called(number) {
            return Err(BingoError::CalledNumberExists(number));
        }
        self.called_numbers.push_back(ball);
        Ok(ball)
    }

    // === Cards ===

    /// Create a card for this game with an explicit number.
    ///
    /// Does not touch the card counter.
    #[must_use]
    pub fn create_random_card(&self, rng: &mut CardRng, number: u64) -> Card {
        Card::random(rng, self.id, number)
    }

    /// Create a card with the next card number and advance the counter.
    pub fn generate_random_card(&mut self, rng: &mut CardRng) -> Card {
        let card = self.create_random_card(rng, self.next_card_number);
        self.next_card_number += 1;
        card
    }

    /// Generate `amount` cards in parallel, numbered from `next_card_number`.
    ///
    /// The game itself is not modified: commit `next_card_number` from the
    /// result once the cards are stored.
    #[must_use]
    pub fn generate_bulk_random_cards(&self, amount: usize, config: &GeneratorConfig) -> BulkCards {
        BulkCardScheduler::new(config.clone()).generate(self, amount)
    }

    /// Rows of `card` whose numbers have all been called.
    pub fn match_winning_rows(&self, card: &Card) -> BingoResult<WinningRows> {
        match_winning_rows(self, card)
    }
}

/// Load a call ledger, rejecting any ball that appears twice.
fn deserialize_ledger<'de, D>(deserializer: D) -> Result<Vector<Ball>, D::Error>
where
    D: Deserializer<'de>,
{
    let balls = Vector::<Ball>::deserialize(deserializer)?;
    let mut seen = [false; MAX_BALL as usize + 1];
    for ball in &balls {
        let slot = &mut seen[ball.number() as usize];
        if *slot {
            return Err(D::Error::custom(BingoError::CalledNumberExists(ball.number())));
        }
        *slot = true;
    }
    Ok(balls)
}
