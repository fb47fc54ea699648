//! Index selection for drawing songs.
//!
//! The song pool never owns a global generator. It is handed an
//! `IndexSource`, which lets tests script the draw order while real games
//! use a seeded or entropy-backed generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of indices uniformly distributed over `0..upper`
pub trait IndexSource {
    /// `upper` is always greater than zero
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Index source backed by any rand generator
#[derive(Debug, Clone)]
pub struct RandomIndex<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIndex<StdRng> {
    /// Reproducible draw order for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Always picks the same index, clamped to the last valid one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.min(upper.saturating_sub(1))
    }
}
