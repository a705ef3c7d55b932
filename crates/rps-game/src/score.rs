//! Running score tally and the final verdict.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Running totals for a series. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player: u64,
    system: u64,
    draws: u64,
}

impl Scoreboard {
    /// A fresh 0-0 scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the player.
    pub fn player(&self) -> u64 {
        self.player
    }

    /// Rounds won by the system.
    pub fn system(&self) -> u64 {
        self.system
    }

    /// Rounds that ended level.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> u64 {
        self.player + self.system + self.draws
    }

    /// Credit one round to its winner.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player += 1,
            Outcome::SystemWins => self.system += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// The verdict if the series ended now.
    pub fn verdict(&self) -> Verdict {
        match self.player.cmp(&self.system) {
            std::cmp::Ordering::Less => Verdict::Lose,
            std::cmp::Ordering::Greater => Verdict::Win,
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player's score = {} : System's score = {}",
            self.player, self.system
        )
    }
}

/// Overall result of a series, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Player took more rounds.
    Win,
    /// System took more rounds.
    Lose,
    /// Both took the same number.
    Tie,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Congrats🥂, You Win!"),
            Self::Lose => write!(f, "So sorry😢, You Lose!"),
            Self::Tie => write!(f, "🤷It's a Tie! I guess it was inevitable"),
        }
    }
}
