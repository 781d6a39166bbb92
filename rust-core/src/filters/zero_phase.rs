//! Forward-backward (zero-phase) filtering
//!
//! Runs an IIR filter over the signal, then over the reversed result, so the
//! phase shifts cancel. Odd extension at both ends plus steady-state initial
//! conditions keep the edges free of start-up transients.

use super::design::{LowpassSpec, TransferFunction};
use super::iir::{IirFilter, lfilter_zi};
use crate::error::{Result, SignalError};

/// Default zero-phase padding: three times the number of taps
pub fn default_padlen(tf: &TransferFunction) -> usize {
    3 * tf.ntaps()
}

/// Odd extension: 2·x[0] - x[padlen..1] before, 2·x[n-1] - x[n-2..n-padlen-1] after
fn odd_extension(signal: &[f64], padlen: usize) -> Vec<f64> {
    let n = signal.len();
    let first = signal[0];
    let last = signal[n - 1];

    let mut extended = Vec::with_capacity(n + 2 * padlen);
    extended.extend((1..=padlen).rev().map(|i| 2.0 * first - signal[i]));
    extended.extend_from_slice(signal);
    extended.extend((1..=padlen).map(|i| 2.0 * last - signal[n - 1 - i]));
    extended
}

/// Apply `tf` forward and backward with zero net phase
///
/// # Errors
/// `SignalTooShort` unless the signal is longer than the padding length.
pub fn filtfilt(tf: &TransferFunction, signal: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(SignalError::EmptySignal);
    }
    let padlen = default_padlen(tf);
    if signal.len() <= padlen {
        return Err(SignalError::SignalTooShort {
            len: signal.len(),
            required: padlen,
        });
    }

    let zi = lfilter_zi(tf)?;
    let mut filter = IirFilter::new(tf)?;
    let scaled = |scale: f64| -> Vec<f64> { zi.iter().map(|&z| z * scale).collect() };

    let mut buffer = odd_extension(signal, padlen);

    // Forward pass
    filter.set_state(&scaled(buffer[0]))?;
    filter.process_block_inplace(&mut buffer);

    // Backward pass
    buffer.reverse();
    filter.set_state(&scaled(buffer[0]))?;
    filter.process_block_inplace(&mut buffer);
    buffer.reverse();

    Ok(buffer[padlen..padlen + signal.len()].to_vec())
}

/// Butterworth low-pass applied with zero phase
///
/// # Arguments
/// * `data` - Input samples
/// * `cutoff` - Cutoff frequency in Hz, strictly below fs / 2
/// * `fs` - Sample rate in Hz
/// * `order` - Filter order
///
/// # Returns
/// Filtered samples, same length as the input
pub fn butter_lowpass_filter(data: &[f64], cutoff: f64, fs: f64, order: usize) -> Result<Vec<f64>> {
    // Coefficients are designed fresh on every call
    let tf = LowpassSpec::new(cutoff, fs, order).design()?;
    filtfilt(&tf, data)
}
