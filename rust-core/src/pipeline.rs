//! Generate → add noise → filter → analyse, as one straight-line run
//!
//! Both front ends (batch and interactive) build a `PipelineConfig` and call
//! the same `SignalPipeline`.

use crate::error::{Result, SignalError, ensure_finite};
use crate::filters::{LowpassSpec, filtfilt, moving_average};
use crate::signal::{NoiseGenerator, SampledSignal, generate_sine_wave, sample_count};
use crate::spectrum::{Spectrum, SpectrumAnalyzer};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Sample rate used by both front ends
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;

/// Moving-average window used by both front ends
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Butterworth order used by both front ends
pub const DEFAULT_FILTER_ORDER: usize = 5;

/// Parameters for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Sine frequency in Hz
    pub frequency: f64,

    /// Signal length in seconds
    pub duration: f64,

    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,

    /// Butterworth cutoff frequency in Hz
    pub cutoff: f64,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Sine peak amplitude
    pub amplitude: f64,

    /// Moving-average window in samples
    pub window_size: usize,

    /// Butterworth filter order
    pub filter_order: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frequency: 50.0,
            duration: 1.0,
            noise_level: 0.3,
            cutoff: 60.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: 1.0,
            window_size: DEFAULT_WINDOW_SIZE,
            filter_order: DEFAULT_FILTER_ORDER,
        }
    }
}

impl PipelineConfig {
    /// The four user-facing parameters, everything else at its default
    pub fn new(frequency: f64, duration: f64, noise_level: f64, cutoff: f64) -> Self {
        Self {
            frequency,
            duration,
            noise_level,
            cutoff,
            ..Self::default()
        }
    }

    /// Check every parameter before any numerical work starts
    ///
    /// # Returns
    /// The sample count N the run will produce
    pub fn validate(&self) -> Result<usize> {
        ensure_finite("frequency", self.frequency)?;
        ensure_finite("amplitude", self.amplitude)?;
        if !(self.noise_level.is_finite() && self.noise_level >= 0.0) {
            return Err(SignalError::InvalidParameter {
                name: "noise level",
                value: self.noise_level,
            });
        }

        let n = sample_count(self.sample_rate, self.duration)?;

        LowpassSpec::new(self.cutoff, self.sample_rate, self.filter_order).normalized_cutoff()?;
        if self.filter_order == 0 {
            return Err(SignalError::InvalidFilterOrder(self.filter_order));
        }
        let required = self.filter_order.saturating_add(1).saturating_mul(3);
        if n <= required {
            return Err(SignalError::SignalTooShort { len: n, required });
        }

        if self.window_size == 0 || self.window_size > n {
            return Err(SignalError::InvalidWindowSize {
                window_size: self.window_size,
                signal_len: n,
            });
        }

        Ok(n)
    }
}

/// Everything the renderer needs from one run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Noise-free sine
    pub clean: SampledSignal,

    /// Sine plus noise
    pub noisy: SampledSignal,

    /// Noisy signal smoothed by the moving average
    pub moving_average: SampledSignal,

    /// Noisy signal after the zero-phase Butterworth low-pass
    pub butterworth: SampledSignal,

    /// Spectrum of the noisy signal
    pub noisy_spectrum: Spectrum,

    /// Spectrum of the Butterworth output
    pub filtered_spectrum: Spectrum,
}

impl PipelineOutput {
    /// Shared time axis in seconds
    pub fn time(&self) -> &[f64] {
        self.clean.time()
    }
}

/// Signal processing pipeline with an injectable noise source
pub struct SignalPipeline<R: Rng = StdRng> {
    config: PipelineConfig,
    noise: NoiseGenerator<R>,
}

impl SignalPipeline<StdRng> {
    /// Pipeline drawing noise from system entropy
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            noise: NoiseGenerator::from_entropy(),
        }
    }

    /// Pipeline whose noise is reproducible from `seed`
    pub fn with_seed(config: PipelineConfig, seed: u64) -> Self {
        Self {
            config,
            noise: NoiseGenerator::with_seed(seed),
        }
    }
}

impl<R: Rng> SignalPipeline<R> {
    pub fn with_noise(config: PipelineConfig, noise: NoiseGenerator<R>) -> Self {
        Self { config, noise }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the whole chain once; any failure aborts the run
    pub fn run(&mut self) -> Result<PipelineOutput> {
        let config = &self.config;
        let n = config.validate()?;
        log::info!(
            "running pipeline: {} Hz sine, {} s at {} Hz ({} samples), noise {}, cutoff {} Hz",
            config.frequency,
            config.duration,
            config.sample_rate,
            n,
            config.noise_level,
            config.cutoff
        );

        let clean = generate_sine_wave(
            config.frequency,
            config.sample_rate,
            config.duration,
            config.amplitude,
        )?;
        let noisy = self.noise.add_noise(&clean, config.noise_level)?;

        let smoothed = noisy.with_samples(moving_average(noisy.samples(), config.window_size)?)?;

        // Designed per run, never cached
        let tf = LowpassSpec::new(config.cutoff, config.sample_rate, config.filter_order).design()?;
        let butterworth = noisy.with_samples(filtfilt(&tf, noisy.samples())?)?;

        let analyzer = SpectrumAnalyzer::new(config.sample_rate)?;
        let noisy_spectrum = analyzer.analyze(noisy.samples())?;
        let filtered_spectrum = analyzer.analyze(butterworth.samples())?;

        if let Some((freq, mag)) = filtered_spectrum.peak() {
            log::debug!("filtered spectrum peak: {:.2} Hz, magnitude {:.4}", freq, mag);
        }

        Ok(PipelineOutput {
            clean,
            noisy,
            moving_average: smoothed,
            butterworth,
            noisy_spectrum,
            filtered_spectrum,
        })
    }
}

/// Run a pipeline with fresh entropy-seeded noise
pub fn run_pipeline(config: PipelineConfig) -> Result<PipelineOutput> {
    SignalPipeline::new(config).run()
}
