//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! The simulation owns exactly one `SimRng`.  Every random draw (arrival
//! counts, group sizes, privilege tags, ride selection, duration jitter,
//! movement jitter) goes through it in a fixed order dictated by the tick
//! loop, so the same seed and configuration always reproduce the same run.
//! Unseeded generators draw their seed from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use crate::{CoreError, CoreResult};

/// Simulation-level RNG, driven only from the single-threaded tick loop.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from `seed` when given, otherwise from OS entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => SimRng(SmallRng::from_entropy()),
        }
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Symmetric jitter: `spread * u` with `u` uniform in `[-1, 1)`.
    #[inline]
    pub fn jitter(&mut self, spread: f64) -> f64 {
        spread * (2.0 * self.random::<f64>() - 1.0)
    }

    /// Draw a Poisson-distributed count with mean `lambda`.
    pub fn poisson(&mut self, lambda: f64) -> CoreResult<u64> {
        let dist = Poisson::new(lambda).map_err(|_| CoreError::InvalidRate(lambda))?;
        let draw: f64 = dist.sample(&mut self.0);
        Ok(draw as u64)
    }

    /// Walk `items` accumulating `weight(item)` and return the first item
    /// whose running total exceeds one uniform draw in `[0, 1)`.
    ///
    /// Returns `None` when the weights sum to less than the draw, so callers
    /// choose their own fallback.
    pub fn pick_cumulative<'a, T, F>(&mut self, items: &'a [T], weight: F) -> Option<&'a T>
    where
        F: Fn(&T) -> f64,
    {
        let draw: f64 = self.random();
        let mut accum = 0.0;
        for item in items {
            accum += weight(item);
            if draw < accum {
                return Some(item);
            }
        }
        None
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
