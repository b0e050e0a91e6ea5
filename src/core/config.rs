//! Card generator configuration.
//!
//! `GeneratorConfig` controls how bulk generation is scheduled:
//! - `workers`: how many worker threads share the work
//! - `seed`: the root seed every worker stream is forked from
//!
//! The defaults (hardware parallelism, OS entropy) are what a server wants.
//! Tests pin both to get reproducible output.

use serde::{Deserialize, Serialize};

use super::rng::CardRng;

/// Configuration for card generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Number of bulk workers. `None` uses the available hardware parallelism.
    pub workers: Option<usize>,

    /// Root seed. `None` seeds from OS entropy.
    ///
    /// A fixed seed together with a fixed worker count makes bulk
    /// generation fully reproducible.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set a fixed root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve the number of workers to spawn. Never below 1.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }

    /// Build the root random stream.
    #[must_use]
    pub fn root_rng(&self) -> CardRng {
        match self.seed {
            Some(seed) => CardRng::new(seed),
            None => CardRng::from_entropy(),
        }
    }
}
