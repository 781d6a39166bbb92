//! One-sided magnitude spectrum of a sampled signal

use super::fft::FftEngine;
use crate::error::{Result, SignalError};

/// Frequency / magnitude pairs from DC up to (not including) Nyquist
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin centre frequencies in Hz, spaced sample_rate / N apart
    pub frequencies: Vec<f64>,

    /// Amplitude at each bin (2/N · |X[k]|), never negative
    pub magnitudes: Vec<f64>,

    /// Sample rate of the analysed signal in Hz
    pub sample_rate: f64,

    /// Length of the analysed signal
    pub signal_len: usize,
}

impl Spectrum {
    /// Number of bins (floor(N/2))
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Bin spacing in Hz
    pub fn resolution(&self) -> f64 {
        self.sample_rate / self.signal_len as f64
    }

    /// Dominant bin as (frequency, magnitude)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, &mag)| (self.frequencies[i], mag))
    }

    /// Iterate over (frequency, magnitude) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

/// Spectrum analyzer bound to a sample rate
///
/// Plans one FFT per signal length on demand.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumAnalyzer {
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    pub fn new(sample_rate: f64) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(SignalError::InvalidSampleRate(sample_rate));
        }
        Ok(Self { sample_rate })
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Analyze the full-length signal
    ///
    /// # Arguments
    /// * `signal` - Input samples (any non-zero length)
    ///
    /// # Returns
    /// floor(N/2) bins of frequency and 2/N-normalised magnitude
    pub fn analyze(&self, signal: &[f64]) -> Result<Spectrum> {
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        let mut engine = FftEngine::new(signal.len())?;
        let magnitudes = engine.compute_amplitude(signal)?;
        let frequencies = engine.frequency_axis(self.sample_rate);

        Ok(Spectrum {
            frequencies,
            magnitudes,
            sample_rate: self.sample_rate,
            signal_len: signal.len(),
        })
    }
}

/// One-sided magnitude spectrum of `signal` sampled at `sample_rate` Hz
pub fn compute_spectrum(signal: &[f64], sample_rate: f64) -> Result<Spectrum> {
    SpectrumAnalyzer::new(sample_rate)?.analyze(signal)
}
