//! Random sources for drawing and rolling dice.
//!
//! ## Key Features
//!
//! - **Injectable**: all dice code is generic over [`RandomSource`]
//! - **Deterministic**: same seed produces identical games
//! - **Scriptable**: [`ScriptedRng`] replays fixed values for tests
//!
//! ```
//! use press_or_pass::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.below(6), again.below(6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source used by the draw engine and the dice roller.
pub trait RandomSource {
    /// Return a uniformly distributed value in `0..upper`.
    ///
    /// `upper` is always non-zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// Seedable RNG backed by ChaCha8.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of values.
///
/// Each call to `below` pops the next value. Panics when the script runs
/// out or a value is out of range, so a test fails loudly if the engine
/// consumes randomness differently than expected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more values to the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = usize>) {
        self.values.extend(values);
    }

    /// Values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, upper: usize) -> usize {
        let value = self.values.pop_front().expect("scripted rng exhausted");
        assert!(value < upper, "scripted value {value} out of range 0..{upper}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.below(1000), rng2.below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = GameRng::new(7);
        for upper in 1..20 {
            for _ in 0..50 {
                assert!(rng.below(upper) < upper);
            }
        }
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([2, 0, 5]);
        assert_eq!(rng.below(3), 2);
        assert_eq!(rng.below(1), 0);
        rng.extend([1]);
        assert_eq!(rng.below(6), 5);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_rejects_out_of_range() {
        let mut rng = ScriptedRng::new([6]);
        rng.below(6);
    }
}
