//! Game system: called balls, bulk card generation, win matching.
//!
//! ## Key Types
//!
//! - `Ball`: A called number (1-90)
//! - `Game`: Card counter and call ledger
//! - `BulkCardScheduler`: Parallel card generation with sequential numbers
//! - `WinningRows`: Fully called rows of a card

pub mod ball;
pub mod game;
pub mod bulk;
pub mod matcher;

pub use ball::{Ball, MAX_BALL, MIN_BALL};
pub use game::Game;
pub use bulk::{BulkCardScheduler, BulkCards};
pub use matcher::{match_winning_rows, WinningRows};
