//! Python bindings for signal generation

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::signal::{self, NoiseGenerator};

/// Generate a sampled sine wave
///
/// Args:
///     frequency: Sine frequency in Hz
///     sample_rate: Sample rate in Hz
///     duration: Length in seconds
///     amplitude: Peak amplitude (default: 1.0)
///
/// Returns:
///     (time, samples) as numpy arrays
#[pyfunction]
#[pyo3(signature = (frequency, sample_rate, duration, amplitude=1.0))]
pub fn generate_sine_wave<'py>(
    py: Python<'py>,
    frequency: f64,
    sample_rate: f64,
    duration: f64,
    amplitude: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let wave = signal::generate_sine_wave(frequency, sample_rate, duration, amplitude)?;
    Ok((
        PyArray1::from_slice(py, wave.time()),
        PyArray1::from_slice(py, wave.samples()),
    ))
}

/// Add zero-mean Gaussian noise
///
/// Args:
///     samples: Input signal as numpy array
///     noise_level: Noise standard deviation
///     seed: Optional seed for reproducible noise
///
/// Returns:
///     Noisy signal as numpy array
#[pyfunction]
#[pyo3(signature = (samples, noise_level, seed=None))]
pub fn add_noise<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    noise_level: f64,
    seed: Option<u64>,
) -> PyResult<&'py PyArray1<f64>> {
    let input = samples.as_slice()?;
    let mut generator = match seed {
        Some(seed) => NoiseGenerator::with_seed(seed),
        None => NoiseGenerator::from_entropy(),
    };
    let noise = generator.noise(noise_level, input.len())?;
    let noisy: Vec<f64> = input.iter().zip(&noise).map(|(x, n)| x + n).collect();

    Ok(PyArray1::from_vec(py, noisy))
}
