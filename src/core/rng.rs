//! Deterministic random number generation.
//!
//! The only randomness in the crate is the number-phase placement
//! heuristic's pick among equally ranked corner or edge cells. Wrapping
//! a seeded ChaCha8 stream keeps bot behavior reproducible: the same
//! seed replays the same game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for bot move selection.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
