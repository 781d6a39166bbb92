//! Smoothing and low-pass filters
//!
//! Both filters are stateless from the caller's point of view: they take a
//! block of samples and return a filtered block of the same length.

pub mod fir;
pub mod design;
pub mod iir;
pub mod zero_phase;

pub use fir::{convolve_same, moving_average};
pub use design::{LowpassSpec, TransferFunction, butter_lowpass_design, frequency_response};
pub use iir::{IirFilter, lfilter_zi};
pub use zero_phase::{butter_lowpass_filter, filtfilt};
