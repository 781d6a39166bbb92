//! Additive Gaussian noise with an injectable random source

use super::source::SampledSignal;
use crate::error::{Result, SignalError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Gaussian noise generator
///
/// Production code seeds from system entropy; tests pass a fixed seed so
/// noisy signals are reproducible.
pub struct NoiseGenerator<R: Rng = StdRng> {
    rng: R,
}

impl NoiseGenerator<StdRng> {
    /// Seed from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> NoiseGenerator<R> {
    /// Wrap any random source
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `len` samples of N(0, 1) scaled by `level`
    pub fn noise(&mut self, level: f64, len: usize) -> Result<Vec<f64>> {
        validate_level(level)?;
        Ok((0..len)
            .map(|_| level * self.rng.sample::<f64, _>(StandardNormal))
            .collect())
    }

    /// Add scaled Gaussian noise to every sample of `signal`
    ///
    /// A level of 0 returns the clean samples unchanged.
    pub fn add_noise(&mut self, signal: &SampledSignal, level: f64) -> Result<SampledSignal> {
        let noise = self.noise(level, signal.len())?;
        let noisy = signal
            .samples()
            .iter()
            .zip(noise.iter())
            .map(|(&s, &n)| s + n)
            .collect();
        signal.with_samples(noisy)
    }
}

fn validate_level(level: f64) -> Result<()> {
    if level.is_finite() && level >= 0.0 {
        Ok(())
    } else {
        Err(SignalError::InvalidParameter {
            name: "noise level",
            value: level,
        })
    }
}
