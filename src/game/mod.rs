//! Game rules: catalog, rounds, randomness and the session state machine

pub mod catalog;
pub mod random;
pub mod round;
pub mod session;

// Re-export core game types
pub use catalog::{Catalog, ItemId, REFERENCE_ITEMS};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use round::{Round, CHOICES_PER_ROUND};
pub use session::{GameSession, Outcome, Phase, SessionSnapshot, DEFAULT_MAX_ROUNDS, GAME_OVER_TITLE};
