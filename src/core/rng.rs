//! Deterministic random number generation for tie-breaking.
//!
//! The recursive strategies are fully deterministic. Randomness only enters
//! through the one-ply reflex selector, which breaks ties between equally
//! scored actions uniformly at random. A seeded ChaCha8 stream keeps those
//! choices reproducible, and its position can be captured and restored.
//!
//! ```
//! use rust_gametree::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.pick(&[1, 4, 7]), rng2.pick(&[1, 4, 7]));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG used for randomized tie-breaks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick one element of a slice uniformly at random.
    ///
    /// Returns `None` for an empty slice.
    pub fn pick<T: Copy>(&mut self, candidates: &[T]) -> Option<T> {
        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            n => Some(candidates[self.gen_range_usize(0..n)]),
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Where a tie-break stream stands: its seed and ChaCha8 word position.
///
/// Restoring seeks straight to `word_pos`, so capture and resume cost the
/// same however many draws came before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
