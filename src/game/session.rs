//! Game session state machine
//!
//! A [`GameSession`] enforces the rules of one playthrough: a fixed number of
//! rounds, each with exactly one correct answer among three choices.
//!
//! ```text
//!   InRound --submit_answer--> AwaitingContinue --continue_game--> InRound
//!                                                      |
//!                                     (rounds_played == max_rounds)
//!                                                      v
//!   InRound <-------------------restart------------- GameOver
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::error::{GameResult, QuizError};
use crate::game::catalog::{Catalog, ItemId};
use crate::game::random::{RandomSource, ThreadRandom};
use crate::game::round::{Round, CHOICES_PER_ROUND};

/// Number of rounds in a playthrough unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: u32 = 8;

/// Title shown with the end-of-game summary
pub const GAME_OVER_TITLE: &str = "Game over";

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the player to pick one of the three choices
    InRound,
    /// An answer was evaluated; the outcome is on display
    AwaitingContinue,
    /// All rounds are played; only `restart` is accepted
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::InRound => "in round",
            Phase::AwaitingContinue => "awaiting continue",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Result of evaluating a submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub correct: bool,
    /// "Correct" or "Wrong"
    pub title: String,
    pub message: String,
    /// The item the player picked
    pub selected: ItemId,
    /// The item the player was asked to find
    pub answer: ItemId,
    /// Score after evaluation
    pub score: u32,
}

/// Serializable read-only view of a session for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub phase: Phase,
    pub score: u32,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub choices: Vec<ItemId>,
    pub prompt: ItemId,
    pub last_outcome: Option<Outcome>,
}

/// One playthrough of the game.
///
/// The session exclusively owns its current [`Round`] and replaces it at the
/// start of every round. All operations run to completion synchronously; hosts
/// sharing a session across threads must wrap it in a mutex themselves.
#[derive(Debug)]
pub struct GameSession<R: RandomSource = ThreadRandom> {
    id: Uuid,
    catalog: Catalog,
    random: R,
    score: u32,
    rounds_played: u32,
    max_rounds: u32,
    current: Round,
    phase: Phase,
    last_outcome: Option<Outcome>,
}

impl GameSession<ThreadRandom> {
    /// Start a session backed by the thread-local random generator
    pub fn new(catalog: Catalog, max_rounds: u32) -> GameResult<Self> {
        Self::with_random(catalog, max_rounds, ThreadRandom::new())
    }

    /// Start a session from a validated configuration
    pub fn from_config(config: &QuizConfig) -> GameResult<Self> {
        Self::from_config_with_random(config, ThreadRandom::new())
    }
}

impl Default for GameSession<ThreadRandom> {
    fn default() -> Self {
        let mut random = ThreadRandom::new();
        let catalog = Catalog::reference();
        let current = Round::draw(&catalog, &mut random);
        Self::assemble(catalog, DEFAULT_MAX_ROUNDS, random, current)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session with an injected random source
    pub fn with_random(catalog: Catalog, max_rounds: u32, mut random: R) -> GameResult<Self> {
        if max_rounds == 0 {
            return Err(QuizError::Configuration {
                message: "Max rounds must be greater than 0".to_string(),
                field: "game.max_rounds".to_string(),
            });
        }

        let current = Round::draw(&catalog, &mut random);
        let session = Self::assemble(catalog, max_rounds, random, current);
        tracing::info!(
            session_id = %session.id,
            max_rounds,
            catalog_size = session.catalog.len(),
            "Started new game session"
        );
        Ok(session)
    }

    /// Start a session from a configuration with an injected random source
    pub fn from_config_with_random(config: &QuizConfig, random: R) -> GameResult<Self> {
        config.validate()?;
        let catalog = config.catalog.to_catalog()?;
        Self::with_random(catalog, config.game.max_rounds, random)
    }

    fn assemble(catalog: Catalog, max_rounds: u32, random: R, current: Round) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            random,
            score: 0,
            rounds_played: 0,
            max_rounds,
            current,
            phase: Phase::InRound,
            last_outcome: None,
        }
    }

    /// Evaluate the player's pick for the current round.
    ///
    /// The round stays available until [`continue_game`](Self::continue_game)
    /// so the caller can still show which item was correct.
    pub fn submit_answer(&mut self, choice_index: usize) -> GameResult<Outcome> {
        self.require_phase(Phase::InRound, "submit an answer")?;

        let selected = self
            .current
            .choice(choice_index)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(session_id = %self.id, choice_index, "Rejected out-of-range choice");
                QuizError::InvalidArgument {
                    message: format!(
                        "choice index {} is out of range 0..{}",
                        choice_index, CHOICES_PER_ROUND
                    ),
                    field: "choice_index".to_string(),
                }
            })?;

        let correct = self.current.is_correct(choice_index);
        let (title, message) = if correct {
            self.score += 1;
            ("Correct", format!("Your score is {}", self.score))
        } else {
            ("Wrong", format!("That's the flag of {}", selected))
        };

        let outcome = Outcome {
            correct,
            title: title.to_string(),
            message,
            selected,
            answer: self.current.target_item().clone(),
            score: self.score,
        };

        tracing::info!(
            session_id = %self.id,
            round = self.rounds_played + 1,
            choice_index,
            correct,
            score = self.score,
            "Answer evaluated"
        );

        self.phase = Phase::AwaitingContinue;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Dismiss the current outcome and move to the next round, or end the game
    pub fn continue_game(&mut self) -> GameResult<()> {
        self.require_phase(Phase::AwaitingContinue, "continue")?;

        self.rounds_played += 1;
        self.last_outcome = None;

        if self.rounds_played < self.max_rounds {
            self.start_new_round();
            self.phase = Phase::InRound;
        } else {
            self.phase = Phase::GameOver;
            tracing::info!(
                session_id = %self.id,
                score = self.score,
                max_rounds = self.max_rounds,
                "Game over"
            );
        }

        Ok(())
    }

    /// Begin a fresh playthrough after the game is over
    pub fn restart(&mut self) -> GameResult<()> {
        self.require_phase(Phase::GameOver, "restart")?;

        self.id = Uuid::new_v4();
        self.score = 0;
        self.rounds_played = 0;
        self.last_outcome = None;
        self.start_new_round();
        self.phase = Phase::InRound;

        tracing::info!(session_id = %self.id, "Restarted game session");
        Ok(())
    }

    fn start_new_round(&mut self) {
        self.current = Round::draw(&self.catalog, &mut self.random);
        tracing::debug!(
            session_id = %self.id,
            round = self.rounds_played + 1,
            target = %self.current.target_item(),
            "Generated new round"
        );
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> GameResult<()> {
        if self.phase == expected {
            return Ok(());
        }
        tracing::warn!(
            session_id = %self.id,
            operation,
            phase = %self.phase,
            "Rejected operation in wrong phase"
        );
        Err(QuizError::InvalidState {
            operation,
            phase: self.phase,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The round being played, or the last one played once the game is over
    pub fn current_round(&self) -> &Round {
        &self.current
    }

    /// The item the player is asked to find this round
    pub fn prompt(&self) -> &ItemId {
        self.current.target_item()
    }

    /// Outcome of the answer awaiting dismissal, if any
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// End-of-game summary, available only once the game is over
    pub fn final_message(&self) -> Option<String> {
        self.is_over()
            .then(|| format!("Your final score is {}", self.score))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.to_string(),
            phase: self.phase,
            score: self.score,
            rounds_played: self.rounds_played,
            max_rounds: self.max_rounds,
            choices: self.current.choices().to_vec(),
            prompt: self.current.target_item().clone(),
            last_outcome: self.last_outcome.clone(),
        }
    }
}
