//! Random sources for AI imperfection.
//!
//! Every random decision in the AI goes through [`RandomSource`], so a match
//! is reproducible from its seed and tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random numbers.
pub trait RandomSource: Send {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform value in `[min, max)`. Returns `min` for an empty range.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.next_unit()
    }

    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }
}

/// Deterministic ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct FixedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source that always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}
