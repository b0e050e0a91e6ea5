//! Parallel bulk card generation.
//!
//! ## Scheduling
//!
//! `amount` cards are split over `W` workers (`GeneratorConfig::worker_count`):
//!
//! 1. The `amount % W` remainder cards are generated first, on their own
//!    stream, taking the first numbers of the run.
//! 2. Each worker then generates `amount / W` cards over its own contiguous
//!    slice of numbers and sends them down a shared channel.
//! 3. The caller drains the channel until every worker has hung up, then
//!    sorts by card number.
//!
//! Every worker owns a `CardRng` forked from the root stream and moved into
//! its thread. No stream is ever reachable from two threads.
//!
//! With a fixed seed and worker count the output is reproducible.

use std::thread;

use crossbeam_channel::unbounded;
use tracing::debug;

use super::game::Game;
use crate::cards::Card;
use crate::core::{GameId, GeneratorConfig};

/// Cards produced by one bulk request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkCards {
    /// Cards ordered by number, ascending and contiguous.
    pub cards: Vec<Card>,

    /// Value to commit back onto the game's card counter.
    pub next_card_number: u64,
}

/// Fans card generation out over a fixed pool of worker threads.
#[derive(Clone, Debug, Default)]
pub struct BulkCardScheduler {
    config: GeneratorConfig,
}

impl BulkCardScheduler {
    /// Create a scheduler.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `amount` cards for `game`, numbered from its next card number.
    ///
    /// `amount == 0` returns no cards and leaves the next number unchanged.
    #[must_use]
    pub fn generate(&self, game: &Game, amount: usize) -> BulkCards {
        self.generate_numbered(game.id, game.next_card_number(), amount)
    }

    /// Generate `amount` cards for `game_id` numbered `first_number..`.
    #[must_use]
    pub fn generate_numbered(
        &self,
        game_id: GameId,
        first_number: u64,
        amount: usize,
    ) -> BulkCards {
        let next_card_number = first_number + amount as u64;
        if amount == 0 {
            return BulkCards {
                cards: Vec::new(),
                next_card_number,
            };
        }

        let workers = self.config.worker_count();
        let per_worker = amount / workers;
        let remainder = amount % workers;
        debug!(%game_id, amount, workers, per_worker, remainder, "generating cards");

        let mut root = self.config.root_rng();
        let mut cards = Vec::with_capacity(amount);

        let mut rest_rng = root.fork();
        let mut number = first_number;
        for _ in 0..remainder {
            cards.push(Card::random(&mut rest_rng, game_id, number));
            number += 1;
        }

        if per_worker > 0 {
            let (tx, rx) = unbounded();
            thread::scope(|scope| {
                for worker in 0..workers {
                    let mut rng = root.fork();
                    let tx = tx.clone();
                    let start = number + (worker * per_worker) as u64;
                    scope.spawn(move || {
                        for offset in 0..per_worker as u64 {
                            if tx.send(Card::random(&mut rng, game_id, start + offset)).is_err() {
                                break;
                            }
                        }
                    });
                }

                // Last sender gone = every worker finished.
                drop(tx);
                cards.extend(rx.iter());
            });
        }

        cards.sort_unstable_by_key(|card| card.number);
        debug!(%game_id, generated = cards.len(), next_card_number, "cards generated");

        BulkCards {
            cards,
            next_card_number,
        }
    }
}
