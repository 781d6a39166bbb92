//! Signal Toolkit - Sine Generation, Filtering and Spectral Analysis
//!
//! Generates a noisy sine, smooths it with a moving average and a zero-phase
//! Butterworth low-pass, and compares their spectra. Optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod filters;
pub mod pipeline;
pub mod plot;
pub mod signal;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SignalError};
pub use filters::{LowpassSpec, TransferFunction, butter_lowpass_filter, moving_average};
pub use pipeline::{PipelineConfig, PipelineOutput, SignalPipeline, run_pipeline};
pub use plot::PlotExporter;
pub use signal::{NoiseGenerator, SampledSignal, generate_sine_wave};
pub use spectrum::{Spectrum, SpectrumAnalyzer, compute_spectrum};
