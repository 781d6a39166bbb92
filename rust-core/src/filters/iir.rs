//! IIR filter in direct form II transposed
//!
//! Keeps order-length state between samples; initial state can be seeded with
//! the steady-state response to a step so filtering starts without a transient.

use super::design::TransferFunction;
use crate::error::{Result, SignalError};
use nalgebra::{DMatrix, DVector};

/// Stateful IIR filter
pub struct IirFilter {
    /// Numerator coefficients, padded to `ntaps` and normalised by a[0]
    b: Vec<f64>,

    /// Denominator coefficients, padded to `ntaps` and normalised by a[0]
    a: Vec<f64>,

    /// Delay-line state z[0..ntaps-1]
    state: Vec<f64>,
}

impl IirFilter {
    /// Create a filter from a transfer function with zeroed state
    pub fn new(tf: &TransferFunction) -> Result<Self> {
        let (b, a) = normalized_coefficients(tf)?;
        let state = vec![0.0; b.len() - 1];
        Ok(Self { b, a, state })
    }

    /// Replace the delay-line state (length must equal the filter order)
    pub fn set_state(&mut self, state: &[f64]) -> Result<()> {
        if state.len() != self.state.len() {
            return Err(SignalError::InvalidParameter {
                name: "state length",
                value: state.len() as f64,
            });
        }
        self.state.copy_from_slice(state);
        Ok(())
    }

    /// Current delay-line state
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Process single sample
    ///
    /// y[n] = b0·x[n] + z0
    /// z[i] = b[i+1]·x[n] + z[i+1] - a[i+1]·y[n]
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let order = self.state.len();
        if order == 0 {
            return self.b[0] * input;
        }

        let output = self.b[0] * input + self.state[0];
        for i in 0..order - 1 {
            self.state[i] = self.b[i + 1] * input + self.state[i + 1] - self.a[i + 1] * output;
        }
        self.state[order - 1] = self.b[order] * input - self.a[order] * output;

        output
    }

    /// Process a block of samples
    pub fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Process a block in-place
    pub fn process_block_inplace(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Reset filter state (clear delay line)
    pub fn reset(&mut self) {
        self.state.fill(0.0);
    }
}

/// Pad b and a to a common length and divide through by a[0]
fn normalized_coefficients(tf: &TransferFunction) -> Result<(Vec<f64>, Vec<f64>)> {
    let a0 = tf.a.first().copied().unwrap_or(0.0);
    if tf.b.is_empty() || a0 == 0.0 || !a0.is_finite() {
        return Err(SignalError::InvalidParameter {
            name: "leading denominator coefficient",
            value: a0,
        });
    }

    let ntaps = tf.ntaps();
    let mut b = vec![0.0; ntaps];
    let mut a = vec![0.0; ntaps];
    for (dst, &src) in b.iter_mut().zip(&tf.b) {
        *dst = src / a0;
    }
    for (dst, &src) in a.iter_mut().zip(&tf.a) {
        *dst = src / a0;
    }
    Ok((b, a))
}

/// Steady-state delay-line values for a unit step input
///
/// Solves (I - Aᵀ)·zi = b[1:] - a[1:]·b[0], where A is the companion matrix of
/// a. Scaling the result by the first input sample starts the filter as if that
/// value had been applied forever.
pub fn lfilter_zi(tf: &TransferFunction) -> Result<Vec<f64>> {
    let (b, a) = normalized_coefficients(tf)?;
    let order = b.len() - 1;
    if order == 0 {
        return Ok(Vec::new());
    }

    // Companion matrix C: first row -a[1:], ones on the subdiagonal.
    // (I - Cᵀ)[i][j] = δij - C[j][i]
    let system = DMatrix::from_fn(order, order, |i, j| {
        let identity = if i == j { 1.0 } else { 0.0 };
        let companion_t = if j == 0 {
            -a[i + 1]
        } else if i + 1 == j {
            1.0
        } else {
            0.0
        };
        identity - companion_t
    });
    let rhs = DVector::from_fn(order, |i, _| b[i + 1] - a[i + 1] * b[0]);

    let zi = system.lu().solve(&rhs).ok_or(SignalError::SingularSystem)?;
    Ok(zi.iter().copied().collect())
}
