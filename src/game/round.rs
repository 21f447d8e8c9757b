//! A single round: three distinct choices and the index of the correct one

use serde::Serialize;

use crate::error::{GameResult, QuizError};
use crate::game::catalog::{Catalog, ItemId};
use crate::game::random::RandomSource;

/// Number of candidate items shown in every round
pub const CHOICES_PER_ROUND: usize = 3;

/// Three pairwise-distinct choices plus the position of the correct one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    choices: [ItemId; CHOICES_PER_ROUND],
    target: usize,
}

impl Round {
    /// Create a round from explicit parts, enforcing distinct choices and a valid target
    pub fn new(choices: [ItemId; CHOICES_PER_ROUND], target: usize) -> GameResult<Self> {
        if target >= CHOICES_PER_ROUND {
            return Err(QuizError::InvalidArgument {
                message: format!(
                    "target index {} is out of range 0..{}",
                    target, CHOICES_PER_ROUND
                ),
                field: "target".to_string(),
            });
        }

        for i in 0..CHOICES_PER_ROUND {
            for j in (i + 1)..CHOICES_PER_ROUND {
                if choices[i] == choices[j] {
                    return Err(QuizError::InvalidArgument {
                        message: format!("choice {} appears more than once", choices[i]),
                        field: "choices".to_string(),
                    });
                }
            }
        }

        Ok(Self { choices, target })
    }

    /// Shuffle the catalog and take its first three entries, then draw the target
    pub fn draw<R: RandomSource + ?Sized>(catalog: &Catalog, random: &mut R) -> Self {
        let mut pool = catalog.items().to_vec();
        random.shuffle(&mut pool);

        // Catalogs hold at least CHOICES_PER_ROUND distinct items
        let choices = [pool[0].clone(), pool[1].clone(), pool[2].clone()];
        let target = random.next_index(CHOICES_PER_ROUND);

        Self { choices, target }
    }

    pub fn choices(&self) -> &[ItemId; CHOICES_PER_ROUND] {
        &self.choices
    }

    pub fn choice(&self, index: usize) -> Option<&ItemId> {
        self.choices.get(index)
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// The item the player is asked to find
    pub fn target_item(&self) -> &ItemId {
        &self.choices[self.target]
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.target
    }
}
