//! Flagquiz - the game engine behind "Guess the Flag"
//!
//! Each round shows three flags and asks the player to tap the one matching a
//! named country. A session keeps score over a fixed number of rounds, then
//! ends and can be restarted.
//!
//! The crate holds only the rules. Rendering, animation and prompts belong to
//! a presentation layer that reads session state and calls
//! [`GameSession::submit_answer`], [`GameSession::continue_game`] and
//! [`GameSession::restart`].

pub mod config;
pub mod error;
pub mod game;
pub mod logging;

// Re-export commonly used types for convenience
pub use error::{GameResult, QuizError};

// Re-export core game types
pub use game::{
    Catalog, GameSession, ItemId, Outcome, Phase, RandomSource, Round, SeededRandom,
    SessionSnapshot, ThreadRandom, CHOICES_PER_ROUND, DEFAULT_MAX_ROUNDS,
};

// Re-export configuration interfaces
pub use config::{CatalogConfig, GameConfig, QuizConfig};
