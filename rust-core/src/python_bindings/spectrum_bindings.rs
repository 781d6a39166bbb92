//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::spectrum;

/// One-sided magnitude spectrum
///
/// Args:
///     signal: Input signal as numpy array
///     sample_rate: Sample rate in Hz
///
/// Returns:
///     (frequencies, magnitudes) as numpy arrays
#[pyfunction]
pub fn compute_spectrum<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    sample_rate: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let spectrum = spectrum::compute_spectrum(signal.as_slice()?, sample_rate)?;
    Ok((
        PyArray1::from_vec(py, spectrum.frequencies),
        PyArray1::from_vec(py, spectrum.magnitudes),
    ))
}
