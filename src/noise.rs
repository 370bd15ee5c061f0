//! Gaussian noise sources.
//!
//! Simulations draw additive Gaussian noise from a [`GaussianSource`]. Sources are injected so a run can be
//! reproduced from a seed or replayed from a fixed sequence.

use rand_core::{RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// A source of zero mean Gaussian samples.
pub trait GaussianSource {
    /// A sample from N(0, std_dev).
    fn sample(&mut self, std_dev: f64) -> f64;
}

impl<G: GaussianSource + ?Sized> GaussianSource for &mut G {
    fn sample(&mut self, std_dev: f64) -> f64 {
        (**self).sample(std_dev)
    }
}

/// Gaussian samples from a random number generator.
///
/// Standard normal draws are scaled by the standard deviation.
pub struct RngGaussian<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngGaussian<R> {
    pub fn new(rng: R) -> RngGaussian<R> {
        RngGaussian { rng }
    }
}

impl<R: RngCore + SeedableRng> RngGaussian<R> {
    /// A reproducible source, the same seed always gives the same samples.
    pub fn seed_from_u64(seed: u64) -> RngGaussian<R> {
        RngGaussian::new(R::seed_from_u64(seed))
    }
}

impl<R: RngCore> GaussianSource for RngGaussian<R> {
    fn sample(&mut self, std_dev: f64) -> f64 {
        let n: f64 = StandardNormal.sample(&mut self.rng);
        n * std_dev
    }
}

/// Replays a fixed sequence of standard normal values, scaled by the standard deviation.
///
/// The sequence repeats once exhausted. An empty sequence is noise free.
#[derive(Clone, Debug, Default)]
pub struct FixedSequence {
    values: Vec<f64>,
    next: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> FixedSequence {
        FixedSequence { values, next: 0 }
    }

    pub fn zeros() -> FixedSequence {
        FixedSequence::default()
    }
}

impl GaussianSource for FixedSequence {
    fn sample(&mut self, std_dev: f64) -> f64 {
        if self.values.is_empty() {
            return 0.;
        }
        let n = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        n * std_dev
    }
}
