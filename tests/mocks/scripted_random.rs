//! Random source that replays pre-scripted rounds

use std::collections::VecDeque;

use flagquiz::{ItemId, RandomSource};

/// Choices and target for one scripted round
#[derive(Debug, Clone)]
pub struct ScriptedRound {
    pub choices: [&'static str; 3],
    pub target: usize,
}

impl ScriptedRound {
    pub fn new(choices: [&'static str; 3], target: usize) -> Self {
        Self { choices, target }
    }
}

/// Replays scripted rounds in order.
///
/// Each shuffle moves the next scripted choices to the front of the pool, and
/// the following index draw returns that round's target. Once the script runs
/// out the pool is left untouched and every draw returns 0.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    rounds: VecDeque<ScriptedRound>,
    pending_target: Option<usize>,
    shuffles: usize,
}

impl ScriptedRandom {
    pub fn new(rounds: impl IntoIterator<Item = ScriptedRound>) -> Self {
        Self {
            rounds: rounds.into_iter().collect(),
            pending_target: None,
            shuffles: 0,
        }
    }

    /// Number of shuffles requested so far, i.e. rounds generated
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }

    pub fn remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.pending_target.take().filter(|t| *t < upper).unwrap_or(0)
    }

    fn shuffle(&mut self, items: &mut [ItemId]) {
        self.shuffles += 1;
        let Some(round) = self.rounds.pop_front() else {
            return;
        };

        for (slot, name) in round.choices.iter().enumerate() {
            let position = items
                .iter()
                .position(|item| item.as_str() == *name)
                .unwrap_or_else(|| panic!("scripted item {} is not in the catalog", name));
            items.swap(slot, position);
        }
        self.pending_target = Some(round.target);
    }
}
