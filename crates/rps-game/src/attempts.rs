//! The attempt budget: how many rounds the series lasts.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::number::{ParsedInt, ends_even, parse_int};

/// A validated attempt count: positive and odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct Attempts(u64);

impl Attempts {
    /// Validate a raw count.
    pub fn new(count: i64) -> GameResult<Self> {
        if count < 1 {
            Err(GameError::NonPositiveAttempts)
        } else if count % 2 == 0 {
            Err(GameError::EvenAttempts)
        } else {
            Ok(Self(count.unsigned_abs()))
        }
    }

    /// Number of rounds in the series.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Attempts {
    type Error = GameError;

    fn try_from(count: i64) -> GameResult<Self> {
        Self::new(count)
    }
}

impl std::fmt::Display for Attempts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse the player's answer to the attempt-count prompt.
pub fn parse_attempts(input: &str) -> GameResult<Attempts> {
    match parse_int(input) {
        ParsedInt::Fits(count) => Attempts::new(count),
        ParsedInt::TooLarge { negative: true, .. } => Err(GameError::NonPositiveAttempts),
        ParsedInt::TooLarge { digits, .. } if ends_even(digits) => Err(GameError::EvenAttempts),
        // Beyond u64 the series is endless either way.
        ParsedInt::TooLarge { digits, .. } => Ok(Attempts(digits.parse().unwrap_or(u64::MAX))),
        ParsedInt::Invalid => Err(GameError::NotAnInteger),
    }
}
