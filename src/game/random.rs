//! Injectable randomness for round generation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::catalog::ItemId;

/// Source of the only non-determinism in a session: catalog shuffles and target draws
pub trait RandomSource {
    /// Uniformly distributed index in `[0, upper)`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Uniform random permutation of `items` in place
    fn shuffle(&mut self, items: &mut [ItemId]) {
        // Fisher-Yates
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }

    fn shuffle(&mut self, items: &mut [ItemId]) {
        (**self).shuffle(items)
    }
}

/// Randomness from the thread-local generator.
///
/// Holds no generator itself, so sessions using it stay `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn shuffle(&mut self, items: &mut [ItemId]) {
        items.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible randomness from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn shuffle(&mut self, items: &mut [ItemId]) {
        items.shuffle(&mut self.rng);
    }
}
