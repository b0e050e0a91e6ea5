//! Called numbers.

use serde::{Deserialize, Serialize};

use crate::core::{BingoError, BingoResult};

/// Lowest ball number.
pub const MIN_BALL: u8 = 1;

/// Highest ball number.
pub const MAX_BALL: u8 = 90;

/// A called number between 1 and 90.
///
/// Serializes as the bare integer.
///
/// ```
/// use bingo_box::game::Ball;
///
/// let ball = Ball::new(42).unwrap();
/// assert_eq!(ball.number(), 42);
/// assert_eq!(ball.to_string(), "42");
/// assert!(Ball::new(0).is_err());
/// assert!(Ball::new(91).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Ball(u8);

impl Ball {
    /// Create a ball, rejecting numbers outside 1-90.
    pub fn new(number: u8) -> BingoResult<Self> {
        if (MIN_BALL..=MAX_BALL).contains(&number) {
            Ok(Self(number))
        } else {
            Err(BingoError::BallOutOfRange(i64::from(number)))
        }
    }

    /// The ball's number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Ball {
    type Error = BingoError;

    fn try_from(number: i64) -> BingoResult<Self> {
        u8::try_from(number)
            .map_err(|_| BingoError::BallOutOfRange(number))
            .and_then(Ball::new)
    }
}

impl From<Ball> for u8 {
    fn from(ball: Ball) -> Self {
        ball.0
    }
}

impl std::fmt::Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
