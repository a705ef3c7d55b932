//! The three moves, the system's random draw, and player move parsing.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::number::{ParsedInt, parse_int};

/// A single throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Move {
    /// All moves in menu order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Map a menu number (1, 2, 3) to its move.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Rock),
            2 => Some(Self::Paper),
            3 => Some(Self::Scissors),
            _ => None,
        }
    }

    /// The menu number for this move.
    pub fn choice(self) -> u8 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The move this one defeats.
    pub fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Draw a move uniformly at random (1d3).
    pub fn random(rng: &mut StdRng) -> Self {
        let roll: u32 = rng.random_range(1..=3);
        match roll {
            1 => Self::Rock,
            2 => Self::Paper,
            3 => Self::Scissors,
            _ => unreachable!(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Parse the player's answer to the move prompt.
pub fn parse_move(input: &str) -> GameResult<Move> {
    let choice = match parse_int(input) {
        ParsedInt::Fits(choice) => choice,
        ParsedInt::TooLarge { negative: true, .. } => i64::MIN,
        ParsedInt::TooLarge { .. } => i64::MAX,
        ParsedInt::Invalid => return Err(GameError::NotANumber),
    };
    Move::from_choice(choice).ok_or(GameError::InvalidMove(choice))
}
