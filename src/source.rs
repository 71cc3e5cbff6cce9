//! Sources of uniform random draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seedable stream of uniform primitive draws.
///
/// Every draw advances the stream, so a source must not be shared between
/// concurrent callers without external locking. All operations are total.
pub trait RandomSource {
    /// Reinitializes the stream; the same seed always yields the same draws.
    fn seed(&mut self, seed: u64);

    /// Full-range signed 32-bit integer.
    fn int32(&mut self) -> i32;

    /// Full-range signed 64-bit integer.
    fn int64(&mut self) -> i64;

    /// Full-range unsigned 32-bit integer.
    fn uint32(&mut self) -> u32;

    /// Full-range unsigned 64-bit integer.
    fn uint64(&mut self) -> u64;

    /// Uniform in `[0, 1)`.
    fn float32(&mut self) -> f32;

    /// Uniform in `[0, 1)`.
    fn float64(&mut self) -> f64;

    /// Uniform in `[0, n)`. Returns 0 without drawing when `n` is 0.
    fn intn(&mut self, n: usize) -> usize;
}

/// [`RandomSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// A source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A source with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandomSource {
    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn int32(&mut self) -> i32 {
        self.rng.random()
    }

    fn int64(&mut self) -> i64 {
        self.rng.random()
    }

    fn uint32(&mut self) -> u32 {
        self.rng.random()
    }

    fn uint64(&mut self) -> u64 {
        self.rng.random()
    }

    fn float32(&mut self) -> f32 {
        self.rng.random()
    }

    fn float64(&mut self) -> f64 {
        self.rng.random()
    }

    fn intn(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}
