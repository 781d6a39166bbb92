//! Uniformly sampled sine wave source

use crate::error::{Result, SignalError, ensure_finite};
use std::f64::consts::PI;

/// Uniformly sampled real-valued signal with its time axis
///
/// The time and amplitude vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    sample_rate: f64,
    time: Vec<f64>,
    samples: Vec<f64>,
}

impl SampledSignal {
    /// Build a signal from a time axis and matching samples
    pub fn new(sample_rate: f64, time: Vec<f64>, samples: Vec<f64>) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(SignalError::InvalidSampleRate(sample_rate));
        }
        if time.len() != samples.len() {
            return Err(SignalError::InvalidParameter {
                name: "sample count",
                value: samples.len() as f64,
            });
        }
        Ok(Self {
            sample_rate,
            time,
            samples,
        })
    }

    /// Same time axis, different amplitudes (e.g. a filtered variant)
    pub fn with_samples(&self, samples: Vec<f64>) -> Result<Self> {
        Self::new(self.sample_rate, self.time.clone(), samples)
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Longest signal accepted, in samples (about 2.8 hours at 1 kHz)
pub const MAX_SAMPLES: usize = 10_000_000;

/// Number of samples covering `duration` seconds: floor(sample_rate × duration)
///
/// # Errors
/// `SignalTooLong` above `MAX_SAMPLES`, checked before anything is allocated.
pub fn sample_count(sample_rate: f64, duration: f64) -> Result<usize> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(SignalError::InvalidSampleRate(sample_rate));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(SignalError::InvalidDuration(duration));
    }

    let samples = (sample_rate * duration).floor();
    if samples > MAX_SAMPLES as f64 {
        return Err(SignalError::SignalTooLong {
            samples,
            max: MAX_SAMPLES,
        });
    }
    let n = samples as usize;
    if n == 0 {
        return Err(SignalError::EmptySignal);
    }
    Ok(n)
}

/// Generate `amplitude · sin(2π·frequency·t)` over the half-open interval [0, duration)
///
/// # Arguments
/// * `frequency` - Sine frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Signal length in seconds
/// * `amplitude` - Peak amplitude (1.0 for a unit sine)
///
/// # Returns
/// N = floor(sample_rate × duration) samples at t_i = i · duration / N
pub fn generate_sine_wave(
    frequency: f64,
    sample_rate: f64,
    duration: f64,
    amplitude: f64,
) -> Result<SampledSignal> {
    ensure_finite("frequency", frequency)?;
    ensure_finite("amplitude", amplitude)?;
    let n = sample_count(sample_rate, duration)?;

    // Endpoint excluded: step is duration / N, not 1 / sample_rate
    let step = duration / n as f64;
    let time: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    let samples = time
        .iter()
        .map(|&t| amplitude * (2.0 * PI * frequency * t).sin())
        .collect();

    Ok(SampledSignal {
        sample_rate,
        time,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sine_length_matches_rate_times_duration() {
        let signal = generate_sine_wave(50.0, 1000.0, 1.0, 1.0).unwrap();
        assert_eq!(signal.len(), 1000);
        assert_eq!(signal.time().len(), signal.samples().len());

        // Truncation, not rounding
        let signal = generate_sine_wave(5.0, 1000.0, 0.2509, 1.0).unwrap();
        assert_eq!(signal.len(), 250);
    }

    #[test]
    fn test_sine_starts_at_zero() {
        let signal = generate_sine_wave(13.0, 500.0, 2.0, 3.0).unwrap();
        assert_eq!(signal.samples()[0], 0.0);
        assert_eq!(signal.time()[0], 0.0);
    }

    #[test]
    fn test_time_axis_excludes_endpoint() {
        let signal = generate_sine_wave(1.0, 10.0, 1.0, 1.0).unwrap();
        let time = signal.time();
        assert_abs_diff_eq!(time[1] - time[0], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(time[9], 0.9, epsilon = 1e-12);
        assert!(time.iter().all(|&t| t < 1.0));
    }

    #[test]
    fn test_amplitude_scaling() {
        // Quarter period lands exactly on the peak
        let signal = generate_sine_wave(250.0, 1000.0, 1.0, 2.5).unwrap();
        assert_abs_diff_eq!(signal.samples()[1], 2.5, epsilon = 1e-12);
        let peak = signal.samples().iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        assert_abs_diff_eq!(peak, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let a = generate_sine_wave(7.5, 1000.0, 0.5, 1.0).unwrap();
        let b = generate_sine_wave(7.5, 1000.0, 0.5, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            generate_sine_wave(50.0, 0.0, 1.0, 1.0),
            Err(SignalError::InvalidSampleRate(_))
        ));
        assert!(matches!(
            generate_sine_wave(50.0, 1000.0, -1.0, 1.0),
            Err(SignalError::InvalidDuration(_))
        ));
        assert!(matches!(
            generate_sine_wave(50.0, 1000.0, 0.0001, 1.0),
            Err(SignalError::EmptySignal)
        ));
        assert!(matches!(
            generate_sine_wave(f64::NAN, 1000.0, 1.0, 1.0),
            Err(SignalError::InvalidParameter { name: "frequency", .. })
        ));
    }

    #[test]
    fn test_sample_count_ceiling() {
        assert_eq!(sample_count(1000.0, 10_000.0).unwrap(), MAX_SAMPLES);
        assert!(matches!(
            sample_count(1000.0, 10_001.0),
            Err(SignalError::SignalTooLong { max: MAX_SAMPLES, .. })
        ));
        // Far beyond usize; must not saturate into an allocation
        assert!(matches!(
            generate_sine_wave(50.0, 1000.0, 1e300, 1.0),
            Err(SignalError::SignalTooLong { .. })
        ));
        assert!(matches!(
            sample_count(1e300, 1e10),
            Err(SignalError::SignalTooLong { .. })
        ));
    }

    #[test]
    fn test_with_samples_checks_length() {
        let signal = generate_sine_wave(1.0, 100.0, 1.0, 1.0).unwrap();
        assert!(signal.with_samples(vec![0.0; 100]).is_ok());
        assert!(signal.with_samples(vec![0.0; 99]).is_err());
    }
}
