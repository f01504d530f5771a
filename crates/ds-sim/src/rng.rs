//! Caller-owned seeded random source for stochastic models.

use ds_core::numeric::Real;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Deterministic random generator handle, seeded once per run.
///
/// The generator is owned by the caller and passed `&mut` into `run`, so
/// reproducibility never depends on ambient process state and concurrent
/// runs cannot interleave draws.
#[derive(Clone, Debug)]
pub struct SimRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One draw from N(0, 1).
    pub fn standard_normal(&mut self) -> Real {
        self.inner.sample(StandardNormal)
    }

    /// One Wiener increment over `dt_s`: N(0, sqrt(dt)).
    pub fn wiener_increment(&mut self, dt_s: Real) -> Real {
        dt_s.sqrt() * self.standard_normal()
    }
}
