//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::error::SignalError;

mod filter_bindings;
mod pipeline_bindings;
mod signal_bindings;
mod spectrum_bindings;

impl From<SignalError> for PyErr {
    fn from(err: SignalError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn signal_toolkit(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(signal_bindings::generate_sine_wave, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::add_noise, m)?)?;

    m.add_function(wrap_pyfunction!(filter_bindings::moving_average, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::butter_lowpass, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::butter_lowpass_filter, m)?)?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_spectrum, m)?)?;

    m.add_function(wrap_pyfunction!(pipeline_bindings::run_pipeline, m)?)?;
    m.add_function(wrap_pyfunction!(pipeline_bindings::save_plots, m)?)?;

    Ok(())
}
