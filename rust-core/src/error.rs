//! Error type shared by every stage of the signal toolkit

use thiserror::Error;

/// Errors raised while generating, filtering, analysing or rendering a signal
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("sample rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),

    #[error("duration must be a positive finite number, got {0}")]
    InvalidDuration(f64),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("signal has no samples")]
    EmptySignal,

    #[error("{samples:.3e} samples requested, at most {max} are supported")]
    SignalTooLong { samples: f64, max: usize },

    #[error("window size {window_size} is invalid for a signal of {signal_len} samples")]
    InvalidWindowSize { window_size: usize, signal_len: usize },

    #[error("cutoff frequency {cutoff} Hz must lie strictly between 0 and the Nyquist frequency {nyquist} Hz")]
    InvalidCutoffFrequency { cutoff: f64, nyquist: f64 },

    #[error("filter order must be at least 1, got {0}")]
    InvalidFilterOrder(usize),

    #[error("signal of {len} samples is too short for zero-phase filtering (need more than {required})")]
    SignalTooShort { len: usize, required: usize },

    #[error("initial filter state could not be solved (singular system)")]
    SingularSystem,

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("failed to render plot: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SignalError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SignalError::Plot(format!("{value:?}"))
    }
}

impl From<image::ImageError> for SignalError {
    fn from(value: image::ImageError) -> Self {
        SignalError::Plot(value.to_string())
    }
}

impl From<realfft::FftError> for SignalError {
    fn from(value: realfft::FftError) -> Self {
        SignalError::Fft(value.to_string())
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SignalError>;

/// Reject NaN and infinities for a named parameter
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SignalError::InvalidParameter { name, value })
    }
}
