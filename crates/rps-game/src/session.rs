//! Game session management.
//!
//! `GameSession` walks a series through three phases: waiting for the
//! attempt count, playing rounds, and finished. Input is validated before
//! any state changes, so a rejected line leaves the session exactly where
//! it was and the caller simply asks again.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::attempts::{Attempts, parse_attempts};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::moves::{Move, parse_move};
use crate::outcome::{Outcome, resolve};
use crate::score::{Scoreboard, Verdict};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a valid attempt count.
    Setup,
    /// A round is open. The system has already drawn its move.
    Playing {
        /// Rounds left, including the open one.
        remaining: u64,
        /// The system's move for the open round.
        system: Move,
    },
    /// Every attempt has been used.
    Finished,
}

/// What happened in one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The player's move.
    pub player: Move,
    /// The system's move.
    pub system: Move,
    /// Who took the round.
    pub outcome: Outcome,
    /// Totals after this round.
    pub scoreboard: Scoreboard,
    /// Rounds left after this one.
    pub remaining: u64,
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Your choice is {}!", self.player)?;
        writeln!(f, "System's choice is {}!", self.system)?;
        write!(f, "{}", self.scoreboard)
    }
}

/// A single rock-paper-scissors series against the system.
pub struct GameSession {
    phase: Phase,
    scoreboard: Scoreboard,
    rng: StdRng,
}

impl GameSession {
    /// Create a session waiting for its attempt count.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            phase: Phase::Setup,
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Rounds left to play. Zero before setup and after the last round.
    pub fn remaining(&self) -> u64 {
        match self.phase {
            Phase::Playing { remaining, .. } => remaining,
            Phase::Setup | Phase::Finished => 0,
        }
    }

    /// The system's move for the open round, if one is open.
    pub fn pending_move(&self) -> Option<Move> {
        match self.phase {
            Phase::Playing { system, .. } => Some(system),
            Phase::Setup | Phase::Finished => None,
        }
    }

    /// Whether every attempt has been used.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The final verdict, once the series is over.
    pub fn verdict(&self) -> Option<Verdict> {
        self.is_finished().then(|| self.scoreboard.verdict())
    }

    /// Set the attempt count from a line of input and open round 1.
    pub fn start(&mut self, input: &str) -> GameResult<Attempts> {
        if self.phase != Phase::Setup {
            return Err(GameError::AlreadyStarted);
        }

        let attempts = parse_attempts(input)?;
        log::info!("starting a series of {attempts} attempts");

        self.phase = Phase::Playing {
            remaining: attempts.get(),
            system: self.draw(),
        };
        Ok(attempts)
    }

    /// Play the open round with the player's move from a line of input.
    pub fn play(&mut self, input: &str) -> GameResult<RoundReport> {
        let (remaining, system) = match self.phase {
            Phase::Setup => return Err(GameError::NotStarted),
            Phase::Finished => return Err(GameError::GameOver),
            Phase::Playing { remaining, system } => (remaining, system),
        };

        let player = parse_move(input)?;
        let outcome = resolve(system, player);
        self.scoreboard.record(outcome);
        log::debug!("system {system} vs player {player}: {outcome}");

        let remaining = remaining - 1;
        self.phase = if remaining == 0 {
            log::info!(
                "series over after {} rounds: {:?}",
                self.scoreboard.rounds(),
                self.scoreboard.verdict()
            );
            Phase::Finished
        } else {
            Phase::Playing {
                remaining,
                system: self.draw(),
            }
        };

        Ok(RoundReport {
            player,
            system,
            outcome,
            scoreboard: self.scoreboard,
            remaining,
        })
    }

    fn draw(&mut self) -> Move {
        let m = Move::random(&mut self.rng);
        log::trace!("system drew {m}");
        m
    }
}
