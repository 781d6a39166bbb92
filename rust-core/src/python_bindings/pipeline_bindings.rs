//! Python bindings for the end-to-end pipeline

use std::path::PathBuf;
use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use crate::pipeline::{PipelineConfig, PipelineOutput, SignalPipeline};
use crate::plot::PlotExporter;

fn run(config: PipelineConfig, seed: Option<u64>) -> crate::error::Result<PipelineOutput> {
    match seed {
        Some(seed) => SignalPipeline::with_seed(config, seed).run(),
        None => SignalPipeline::new(config).run(),
    }
}

/// Run generate → noise → filter → spectrum once
///
/// Args:
///     frequency: Sine frequency in Hz (default: 50)
///     duration: Length in seconds (default: 1.0)
///     noise_level: Noise standard deviation (default: 0.3)
///     cutoff: Butterworth cutoff in Hz (default: 60)
///     seed: Optional seed for reproducible noise
///
/// Returns:
///     dict of numpy arrays: time, clean, noisy, moving_average, butterworth,
///     frequencies, noisy_spectrum, filtered_spectrum
#[pyfunction]
#[pyo3(signature = (frequency=50.0, duration=1.0, noise_level=0.3, cutoff=60.0, seed=None))]
pub fn run_pipeline<'py>(
    py: Python<'py>,
    frequency: f64,
    duration: f64,
    noise_level: f64,
    cutoff: f64,
    seed: Option<u64>,
) -> PyResult<&'py PyDict> {
    let output = run(PipelineConfig::new(frequency, duration, noise_level, cutoff), seed)?;

    let result = PyDict::new(py);
    result.set_item("time", PyArray1::from_slice(py, output.time()))?;
    result.set_item("clean", PyArray1::from_slice(py, output.clean.samples()))?;
    result.set_item("noisy", PyArray1::from_slice(py, output.noisy.samples()))?;
    result.set_item("moving_average", PyArray1::from_slice(py, output.moving_average.samples()))?;
    result.set_item("butterworth", PyArray1::from_slice(py, output.butterworth.samples()))?;
    result.set_item("frequencies", PyArray1::from_slice(py, &output.noisy_spectrum.frequencies))?;
    result.set_item("noisy_spectrum", PyArray1::from_slice(py, &output.noisy_spectrum.magnitudes))?;
    result.set_item("filtered_spectrum", PyArray1::from_slice(py, &output.filtered_spectrum.magnitudes))?;
    Ok(result)
}

/// Run the pipeline and write the three PNG figures
///
/// Returns:
///     List of written file paths
#[pyfunction]
#[pyo3(signature = (output_dir="plots", frequency=50.0, duration=1.0, noise_level=0.3, cutoff=60.0, seed=None))]
pub fn save_plots(
    output_dir: &str,
    frequency: f64,
    duration: f64,
    noise_level: f64,
    cutoff: f64,
    seed: Option<u64>,
) -> PyResult<Vec<PathBuf>> {
    let output = run(PipelineConfig::new(frequency, duration, noise_level, cutoff), seed)?;
    let exporter = PlotExporter::new(output_dir)?;
    Ok(exporter.export_pipeline(&output)?)
}
