//! Digital Butterworth low-pass design
//!
//! Analog prototype → frequency pre-warp → bilinear transform, expanded into
//! transfer-function polynomials b(z) / a(z).

use crate::error::{Result, SignalError};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Digital filter coefficients
///
/// H(z) = (b[0] + b[1]z⁻¹ + … ) / (a[0] + a[1]z⁻¹ + … ), with a[0] = 1
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator (feed-forward) coefficients
    pub b: Vec<f64>,

    /// Denominator (feedback) coefficients
    pub a: Vec<f64>,
}

impl TransferFunction {
    /// Number of taps after padding b and a to a common length
    pub fn ntaps(&self) -> usize {
        self.a.len().max(self.b.len())
    }

    /// Filter order (degree of the denominator)
    pub fn order(&self) -> usize {
        self.ntaps().saturating_sub(1)
    }

    /// Gain at DC: Σb / Σa
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }
}

/// Low-pass filter parameters in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowpassSpec {
    /// Cutoff (-3 dB) frequency in Hz
    pub cutoff: f64,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Filter order (roll-off steepness)
    pub order: usize,
}

impl LowpassSpec {
    pub fn new(cutoff: f64, sample_rate: f64, order: usize) -> Self {
        Self {
            cutoff,
            sample_rate,
            order,
        }
    }

    pub fn nyquist(&self) -> f64 {
        0.5 * self.sample_rate
    }

    /// Cutoff in units of the Nyquist frequency, validated to lie in (0, 1)
    pub fn normalized_cutoff(&self) -> Result<f64> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(SignalError::InvalidSampleRate(self.sample_rate));
        }
        let nyquist = self.nyquist();
        if !(self.cutoff.is_finite() && self.cutoff > 0.0 && self.cutoff < nyquist) {
            return Err(SignalError::InvalidCutoffFrequency {
                cutoff: self.cutoff,
                nyquist,
            });
        }
        Ok(self.cutoff / nyquist)
    }

    /// Design the digital Butterworth filter for these parameters
    pub fn design(&self) -> Result<TransferFunction> {
        butter_lowpass_design(self.order, self.normalized_cutoff()?)
    }
}

/// Design an order-N digital Butterworth low-pass filter
///
/// # Arguments
/// * `order` - Filter order N (≥ 1)
/// * `normalized_cutoff` - Cutoff in units of Nyquist, strictly inside (0, 1)
///
/// # Returns
/// Transfer function with N + 1 coefficients in both b and a
pub fn butter_lowpass_design(order: usize, normalized_cutoff: f64) -> Result<TransferFunction> {
    if order == 0 {
        return Err(SignalError::InvalidFilterOrder(order));
    }
    if !(normalized_cutoff > 0.0 && normalized_cutoff < 1.0) {
        return Err(SignalError::InvalidParameter {
            name: "normalized cutoff",
            value: normalized_cutoff,
        });
    }

    let n = order as f64;

    // Analog prototype: unit-circle poles in the left half plane, no zeros
    let prototype_poles: Vec<Complex64> = (0..order)
        .map(|i| {
            let m = -(n - 1.0) + 2.0 * i as f64;
            -Complex64::from_polar(1.0, PI * m / (2.0 * n))
        })
        .collect();

    // Pre-warp for the bilinear transform at fs = 2 (Nyquist = 1)
    let fs = 2.0;
    let warped = 2.0 * fs * (PI * normalized_cutoff / fs).tan();

    // Low-pass scaling: s → s / ωc
    let analog_poles: Vec<Complex64> = prototype_poles.iter().map(|&p| p * warped).collect();
    let analog_gain = warped.powi(order as i32);

    // Bilinear transform: z = (2fs + s) / (2fs - s); the N analog zeros at
    // infinity all land on z = -1
    let fs2 = Complex64::new(2.0 * fs, 0.0);
    let digital_poles: Vec<Complex64> = analog_poles
        .iter()
        .map(|&p| (fs2 + p) / (fs2 - p))
        .collect();
    let digital_zeros = vec![Complex64::new(-1.0, 0.0); order];
    let denominator: Complex64 = analog_poles.iter().map(|&p| fs2 - p).product();
    let digital_gain = analog_gain * (Complex64::new(1.0, 0.0) / denominator).re;

    let b = poly(&digital_zeros)
        .into_iter()
        .map(|c| digital_gain * c.re)
        .collect();
    let a = poly(&digital_poles).into_iter().map(|c| c.re).collect();

    log::debug!(
        "designed order-{} Butterworth low-pass at {:.4}×Nyquist",
        order,
        normalized_cutoff
    );

    Ok(TransferFunction { b, a })
}

/// Monic polynomial coefficients (highest power first) with the given roots
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * root;
        }
        coeffs = next;
    }
    coeffs
}

/// Calculate frequency response at given frequencies
///
/// # Arguments
/// * `tf` - Transfer function
/// * `frequencies` - Normalized frequencies (units of π rad/sample, 1 = Nyquist)
///
/// # Returns
/// Complex frequency response H(e^jω)
pub fn frequency_response(tf: &TransferFunction, frequencies: &[f64]) -> Vec<Complex64> {
    let evaluate = |coeffs: &[f64], omega: f64| -> Complex64 {
        coeffs
            .iter()
            .enumerate()
            .map(|(n, &c)| c * Complex64::from_polar(1.0, -omega * n as f64))
            .sum()
    };

    frequencies
        .iter()
        .map(|&f| {
            let omega = f * PI;
            evaluate(&tf.b, omega) / evaluate(&tf.a, omega)
        })
        .collect()
}

/// Calculate magnitude response in dB
pub fn magnitude_response_db(tf: &TransferFunction, frequencies: &[f64]) -> Vec<f64> {
    frequency_response(tf, frequencies)
        .iter()
        .map(|c| 20.0 * c.norm().log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_second_order_half_band() {
        let tf = butter_lowpass_design(2, 0.5).unwrap();

        let expected_b = [0.292_893_218_813_452_4, 0.585_786_437_626_904_9, 0.292_893_218_813_452_4];
        let expected_a = [1.0, 0.0, 0.171_572_875_253_809_9];
        for (b, e) in tf.b.iter().zip(expected_b) {
            assert_abs_diff_eq!(*b, e, epsilon = 1e-12);
        }
        for (a, e) in tf.a.iter().zip(expected_a) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_first_order() {
        // Bilinear-transformed RC: b = [k, k], a = [1, -(1-2k)] with k = t/(1+t)
        let tf = butter_lowpass_design(1, 0.25).unwrap();
        let t = (PI * 0.25 / 2.0).tan();
        let k = t / (1.0 + t);
        assert_abs_diff_eq!(tf.b[0], k, epsilon = 1e-12);
        assert_abs_diff_eq!(tf.b[1], k, epsilon = 1e-12);
        assert_abs_diff_eq!(tf.a[1], -(1.0 - 2.0 * k), epsilon = 1e-12);
    }

    #[test]
    fn test_unity_dc_gain_and_length() {
        for order in 1..=8 {
            let tf = butter_lowpass_design(order, 0.12).unwrap();
            assert_eq!(tf.b.len(), order + 1);
            assert_eq!(tf.a.len(), order + 1);
            assert_eq!(tf.order(), order);
            assert_abs_diff_eq!(tf.a[0], 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(tf.dc_gain(), 1.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_minus_three_db_at_cutoff() {
        let tf = butter_lowpass_design(5, 0.12).unwrap();
        let response = frequency_response(&tf, &[0.12]);
        assert_abs_diff_eq!(response[0].norm(), 1.0 / 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic_rolloff() {
        let tf = butter_lowpass_design(5, 0.2).unwrap();
        let freqs: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let db = magnitude_response_db(&tf, &freqs);
        for pair in db.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9);
        }
        // Well into the stopband
        assert!(db[80] < -60.0);
    }

    #[test]
    fn test_spec_validation() {
        assert!(LowpassSpec::new(60.0, 1000.0, 5).design().is_ok());
        assert_abs_diff_eq!(
            LowpassSpec::new(60.0, 1000.0, 5).normalized_cutoff().unwrap(),
            0.12,
            epsilon = 1e-15
        );
        assert!(matches!(
            LowpassSpec::new(500.0, 1000.0, 5).design(),
            Err(SignalError::InvalidCutoffFrequency { .. })
        ));
        assert!(matches!(
            LowpassSpec::new(0.0, 1000.0, 5).design(),
            Err(SignalError::InvalidCutoffFrequency { .. })
        ));
        assert!(matches!(
            LowpassSpec::new(60.0, 1000.0, 0).design(),
            Err(SignalError::InvalidFilterOrder(0))
        ));
        assert!(matches!(
            LowpassSpec::new(60.0, -1.0, 5).design(),
            Err(SignalError::InvalidSampleRate(_))
        ));
    }
}
