//! Rock-paper-scissors series engine.
//!
//! Provides the move set and the system's uniform random draw, the fixed
//! round rule table, a running scoreboard with the final verdict, attempt
//! count validation, and a session state machine that ties them together.

pub mod attempts;
pub mod config;
pub mod error;
pub mod moves;
mod number;
pub mod outcome;
pub mod score;
pub mod session;

pub use attempts::Attempts;
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use moves::Move;
pub use outcome::Outcome;
pub use score::{Scoreboard, Verdict};
pub use session::{GameSession, Phase, RoundReport};
