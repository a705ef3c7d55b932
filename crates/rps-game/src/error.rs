//! Error types for the game engine.
//!
//! The input variants render as the exact message shown to the player, so
//! callers can print `err.to_string()` and re-prompt.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up or playing a series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Attempt count input was not an integer.
    #[error("Error! Please ensure your input is a positive integer")]
    NotAnInteger,

    /// Attempt count was zero or negative.
    #[error("Attemtps must be greater than zero!")]
    NonPositiveAttempts,

    /// Attempt count was even, so the series could end level.
    #[error("Ensure number of attempt is an odd number to help determine a winner.\nTry Again!")]
    EvenAttempts,

    /// Move input was not an integer.
    #[error("Error! Input must be a number.")]
    NotANumber,

    /// Move input was an integer outside 1..=3.
    #[error("Invalid Number. Please enter 1,2 or 3")]
    InvalidMove(i64),

    /// A round was played before the attempt count was set.
    #[error("the game has not started yet")]
    NotStarted,

    /// The attempt count was set twice.
    #[error("the game has already started")]
    AlreadyStarted,

    /// A round was played after every attempt was used.
    #[error("the game is over")]
    GameOver,
}

impl GameError {
    /// Whether the player can fix this by answering the same prompt again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NotAnInteger
                | Self::NonPositiveAttempts
                | Self::EvenAttempts
                | Self::NotANumber
                | Self::InvalidMove(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_retryable() {
        assert!(GameError::NotAnInteger.is_retryable());
        assert!(GameError::EvenAttempts.is_retryable());
        assert!(GameError::InvalidMove(7).is_retryable());
        assert!(!GameError::GameOver.is_retryable());
        assert!(!GameError::NotStarted.is_retryable());
    }

    #[test]
    fn messages_match_prompts() {
        assert_eq!(
            GameError::NonPositiveAttempts.to_string(),
            "Attemtps must be greater than zero!"
        );
        assert_eq!(
            GameError::EvenAttempts.to_string(),
            "Ensure number of attempt is an odd number to help determine a winner.\nTry Again!"
        );
        assert_eq!(
            GameError::InvalidMove(0).to_string(),
            "Invalid Number. Please enter 1,2 or 3"
        );
        assert_eq!(
            GameError::NotANumber.to_string(),
            "Error! Input must be a number."
        );
    }
}
