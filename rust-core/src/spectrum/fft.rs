//! FFT engine using realfft for real-valued signals
//!
//! Transforms the whole signal at its own length (no zero-padding), so bin k
//! sits exactly at k · sample_rate / N.

use crate::error::{Result, SignalError};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals of a fixed length
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer (realfft scrambles it during processing)
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum, fft_size/2 + 1 bins)
    output_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, any positive length)
    pub fn new(fft_size: usize) -> Result<Self> {
        if fft_size == 0 {
            return Err(SignalError::EmptySignal);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the non-negative-frequency half of the DFT
    ///
    /// # Arguments
    /// * `signal` - Input signal, exactly `fft_size` samples
    ///
    /// # Returns
    /// Complex coefficients X[k] for k = 0..=fft_size/2
    pub fn forward(&mut self, signal: &[f64]) -> Result<&[Complex<f64>]> {
        if signal.len() != self.fft_size {
            return Err(SignalError::Fft(format!(
                "expected {} samples, got {}",
                self.fft_size,
                signal.len()
            )));
        }

        self.input_buffer.copy_from_slice(signal);
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)?;

        Ok(&self.output_buffer)
    }

    /// One-sided amplitude spectrum: 2/N · |X[k]| for k < N/2
    ///
    /// The factor of 2 folds in the discarded negative frequencies, so a sine
    /// of amplitude A reads ≈ A at its bin.
    pub fn compute_amplitude(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        let scale = 2.0 / self.fft_size as f64;
        let bins = self.num_bins();
        let coefficients = self.forward(signal)?;

        Ok(coefficients[..bins].iter().map(|c| scale * c.norm()).collect())
    }

    /// Number of retained bins: floor(N/2), Nyquist excluded for even N
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }

    /// Frequency of bin k in Hz
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }

    /// Frequency axis in Hz for the retained bins
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_hz(bin, sample_rate))
            .collect()
    }
}
