//! Python bindings for moving-average and Butterworth filtering

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::filters::{self, LowpassSpec};
use crate::pipeline::DEFAULT_FILTER_ORDER;

/// Centred moving average with zero-padded edges
///
/// Args:
///     data: Input signal as numpy array
///     window_size: Window length in samples
///
/// Returns:
///     Smoothed signal, same length as the input
#[pyfunction]
pub fn moving_average<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    window_size: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let output = filters::moving_average(data.as_slice()?, window_size)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Design a digital Butterworth low-pass
///
/// Args:
///     cutoff: Cutoff frequency in Hz
///     fs: Sample rate in Hz
///     order: Filter order (default: 5)
///
/// Returns:
///     (b, a) coefficient arrays
#[pyfunction]
#[pyo3(signature = (cutoff, fs, order=DEFAULT_FILTER_ORDER))]
pub fn butter_lowpass<'py>(
    py: Python<'py>,
    cutoff: f64,
    fs: f64,
    order: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let tf = LowpassSpec::new(cutoff, fs, order).design()?;
    Ok((PyArray1::from_vec(py, tf.b), PyArray1::from_vec(py, tf.a)))
}

/// Zero-phase Butterworth low-pass filter
///
/// Args:
///     data: Input signal as numpy array
///     cutoff: Cutoff frequency in Hz
///     fs: Sample rate in Hz
///     order: Filter order (default: 5)
///
/// Returns:
///     Filtered signal, same length as the input
#[pyfunction]
#[pyo3(signature = (data, cutoff, fs, order=DEFAULT_FILTER_ORDER))]
pub fn butter_lowpass_filter<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    cutoff: f64,
    fs: f64,
    order: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let output = filters::butter_lowpass_filter(data.as_slice()?, cutoff, fs, order)?;
    Ok(PyArray1::from_vec(py, output))
}
