//! Error types for the flag quiz engine

use thiserror::Error;

use crate::game::Phase;

/// Main error type for the flag quiz engine
///
/// Every variant is a contract violation by the caller or a bad configuration.
/// The engine performs no I/O during play, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Invalid state: cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        field: String,
    },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },
}

impl QuizError {
    /// True for errors caused by calling an operation in the wrong phase
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, QuizError::InvalidState { .. })
    }

    /// True for errors caused by an out-of-range argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, QuizError::InvalidArgument { .. })
    }
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, QuizError>;
