//! Random source adapters backed by `rand`.

use porter_application::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates a new thread random source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Reproducible source: the same seed yields the same identifiers.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}
