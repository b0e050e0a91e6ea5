//! Bulk generation tests.
//!
//! These tests verify parallel card generation:
//! - Contiguous, ordered card numbers regardless of worker count
//! - Counter hand-back (`next_card_number`)
//! - Every card valid at scale
//! - Reproducibility with a fixed seed and worker count

use std::collections::HashSet;

use bingo_box::core::{GameId, GeneratorConfig, UserId};
use bingo_box::game::{BulkCardScheduler, Game};

fn fresh_game() -> Game {
    let mut game = Game::new(UserId::new(1), "test");
    game.id = GameId::new(1);
    game
}

/// Ten thousand cards for a fresh game, default worker pool.
#[test]
fn test_ten_thousand_cards() {
    let game = fresh_game();
    assert_eq!(game.next_card_number(), 1);

    let bulk = game.generate_bulk_random_cards(10_000, &GeneratorConfig::default());

    assert_eq!(bulk.cards.len(), 10_000);
    for (i, card) in bulk.cards.iter().enumerate() {
        assert_eq!(card.number, i as u64 + 1);
        assert_eq!(card.game_id, game.id);
        assert_eq!(card.validate(), Ok(()), "card {}", card.number);
    }
    assert_eq!(bulk.next_card_number, 10_001);

    // Generation does not touch the game; the caller commits the counter.
    assert_eq!(game.next_card_number(), 1);
}

/// Odd worker counts and amounts all produce a contiguous run.
#[test]
fn test_contiguous_for_any_split() {
    let game = fresh_game();
    for workers in [1, 2, 3, 5, 7, 16] {
        for amount in [1, 2, 9, 31, 100] {
            let scheduler = BulkCardScheduler::new(GeneratorConfig::new().with_workers(workers));
            let bulk = scheduler.generate(&game, amount);

            let numbers: Vec<u64> = bulk.cards.iter().map(|card| card.number).collect();
            let expected: Vec<u64> = (1..=amount as u64).collect();
            assert_eq!(numbers, expected, "workers={} amount={}", workers, amount);
            assert_eq!(bulk.next_card_number, amount as u64 + 1);
        }
    }
}

/// Consecutive batches continue numbering after committing the counter.
#[test]
fn test_consecutive_batches() {
    let mut game = fresh_game();
    let config = GeneratorConfig::new().with_workers(4);

    let first = game.generate_bulk_random_cards(25, &config);
    game.commit_card_number(first.next_card_number);
    let second = game.generate_bulk_random_cards(10, &config);

    assert_eq!(second.cards.first().map(|c| c.number), Some(26));
    assert_eq!(second.cards.last().map(|c| c.number), Some(35));
    assert_eq!(second.next_card_number, 36);
}

/// A fixed seed and worker count reproduce the whole batch.
#[test]
fn test_seeded_batch_reproducible() {
    let game = fresh_game();
    let config = GeneratorConfig::new().with_workers(6).with_seed(1);

    let a = game.generate_bulk_random_cards(500, &config);
    let b = game.generate_bulk_random_cards(500, &config);
    assert_eq!(a, b);

    let other = game.generate_bulk_random_cards(500, &config.clone().with_seed(2));
    assert_ne!(a.cards, other.cards);
}

/// Cards in a large batch are not copies of each other.
#[test]
fn test_batch_grids_vary() {
    let game = fresh_game();
    let bulk = game.generate_bulk_random_cards(2_000, &GeneratorConfig::new().with_workers(8));

    let distinct: HashSet<Vec<u8>> = bulk.cards.iter().map(|card| card.numbers()).collect();
    // 15 numbers out of 90 under the layout rules: collisions are vanishingly rare.
    assert!(distinct.len() > 1_990, "only {} distinct grids", distinct.len());
}

/// Zero cards is a no-op.
#[test]
fn test_zero_cards() {
    let game = fresh_game();
    let bulk = game.generate_bulk_random_cards(0, &GeneratorConfig::default());

    assert!(bulk.cards.is_empty());
    assert_eq!(bulk.next_card_number, 1);
}
