//! FIR smoothing by direct convolution
//!
//! "Same"-length output: the full convolution is cropped around its centre,
//! so samples near the edges see a zero-padded input and attenuate toward zero.

use crate::error::{Result, SignalError};

/// Full linear convolution y[n] = Σ h[k]·x[n-k], length N + M - 1
pub fn convolve_full(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    if signal.is_empty() || kernel.is_empty() {
        return Vec::new();
    }

    let mut output = vec![0.0; signal.len() + kernel.len() - 1];
    for (i, &x) in signal.iter().enumerate() {
        for (k, &h) in kernel.iter().enumerate() {
            output[i + k] += x * h;
        }
    }
    output
}

/// Convolution cropped to the length of `signal`
///
/// The crop starts at (M - 1) / 2 in the full output, which centres odd
/// kernels and leans left for even kernels.
///
/// # Errors
/// `InvalidWindowSize` if the kernel is empty or longer than the signal.
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(SignalError::EmptySignal);
    }
    if kernel.is_empty() || kernel.len() > signal.len() {
        return Err(SignalError::InvalidWindowSize {
            window_size: kernel.len(),
            signal_len: signal.len(),
        });
    }

    let offset = (kernel.len() - 1) / 2;
    let full = convolve_full(signal, kernel);
    Ok(full[offset..offset + signal.len()].to_vec())
}

/// Uniform moving average of `window_size` samples
///
/// # Arguments
/// * `signal` - Input samples
/// * `window_size` - Number of taps, each weighted 1/window_size
///
/// # Returns
/// Smoothed samples, same length as the input
pub fn moving_average(signal: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if window_size == 0 || window_size > signal.len() {
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        return Err(SignalError::InvalidWindowSize {
            window_size,
            signal_len: signal.len(),
        });
    }

    let kernel = vec![1.0 / window_size as f64; window_size];
    convolve_same(signal, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-12, "Mismatch at {}: {} vs {}", i, a, e);
        }
    }

    #[test]
    fn test_convolve_full_impulse() {
        let kernel = vec![0.1, 0.2, 0.4, 0.2, 0.1];
        let output = convolve_full(&[1.0, 0.0, 0.0], &kernel);
        assert_eq!(output.len(), 7);
        assert_all_close(&output[..5], &kernel);
    }

    #[test]
    fn test_convolve_same_odd_kernel() {
        let output = convolve_same(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]).unwrap();
        assert_all_close(&output, &[1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_convolve_same_even_kernel() {
        let output = convolve_same(&[1.0, 2.0, 3.0], &[1.0, 1.0]).unwrap();
        assert_all_close(&output, &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_window_one_is_identity() {
        let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin() + 0.1 * i as f64).collect();
        let output = moving_average(&signal, 1).unwrap();
        assert_eq!(output, signal);
    }

    #[test]
    fn test_moving_average_interior_and_edges() {
        let signal = vec![1.0; 10];
        let output = moving_average(&signal, 5).unwrap();
        assert_eq!(output.len(), 10);

        // Interior sees a full window
        for &value in &output[2..8] {
            assert_abs_diff_eq!(value, 1.0, epsilon = 1e-12);
        }
        // Edges see the zero padding
        assert_abs_diff_eq!(output[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(output[1], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(output[9], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_moving_average_even_window_alignment() {
        // Window of 10 on a ramp: crop offset is 4
        let signal: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let output = moving_average(&signal, 10).unwrap();

        // output[0] averages x[0..=4] against zero padding
        assert_abs_diff_eq!(output[0], 1.0, epsilon = 1e-12);
        // output[10] averages x[5..=14]
        assert_abs_diff_eq!(output[10], 9.5, epsilon = 1e-12);
        // output[19] averages x[14..=19]
        assert_abs_diff_eq!(output[19], (14..20).sum::<i32>() as f64 / 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_window_sizes() {
        let signal = vec![1.0; 8];
        assert!(matches!(
            moving_average(&signal, 0),
            Err(SignalError::InvalidWindowSize { window_size: 0, signal_len: 8 })
        ));
        assert!(matches!(
            moving_average(&signal, 9),
            Err(SignalError::InvalidWindowSize { window_size: 9, signal_len: 8 })
        ));
        assert!(matches!(moving_average(&[], 3), Err(SignalError::EmptySignal)));
    }
}
