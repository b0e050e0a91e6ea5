//! Core types: ids, RNG, configuration, errors.
//!
//! Everything here is independent of bingo rules. `cards` and `game` build
//! on top of it.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardId, GameId, PlayerId, UserId};
pub use rng::{CardRng, CardRngState};
pub use config::GeneratorConfig;
pub use error::{BingoError, BingoResult};
