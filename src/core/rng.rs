//! Deterministic random number generation with forking for card workers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical cards
//! - **Forkable**: Hand each bulk worker its own independent stream
//! - **Serializable**: O(1) state capture and restore
//!
//! A `CardRng` is never shared between threads. The bulk scheduler forks one
//! stream per worker and moves it into the worker.
//!
//! ```
//! use bingo_box::core::CardRng;
//!
//! let mut root = CardRng::new(42);
//!
//! // Fork for a worker
//! let mut worker = root.fork();
//!
//! // Root and fork produce different sequences
//! assert_ne!(root.permutation(9), worker.permutation(9));
//!
//! // But forks are deterministic - same fork counter = same sequence
//! let mut root2 = CardRng::new(42);
//! let worker2 = root2.fork();
//! assert_eq!(worker.seed(), worker2.seed());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to lay out cards.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut self.inner);
        perm
    }

    /// Draw `amount` distinct values from `0..length` without replacement.
    ///
    /// Panics if `amount > length`.
    pub fn sample(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CardRngState {
        CardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
///
/// Recording the state before a card is generated is enough to regenerate
/// that exact card later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
