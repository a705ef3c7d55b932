//! Round outcome resolution.

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's move beat the system's.
    PlayerWins,
    /// The system's move beat the player's.
    SystemWins,
    /// Both sides threw the same move.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerWins => write!(f, "player wins"),
            Self::SystemWins => write!(f, "system wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Resolve a round from the system's and the player's move.
pub fn resolve(system: Move, player: Move) -> Outcome {
    match (system, player) {
        (Move::Rock, Move::Paper)
        | (Move::Paper, Move::Scissors)
        | (Move::Scissors, Move::Rock) => Outcome::PlayerWins,
        _ if system == player => Outcome::Draw,
        _ => Outcome::SystemWins,
    }
}
