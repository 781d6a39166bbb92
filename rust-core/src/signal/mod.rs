//! Synthetic signal generation and noise injection

pub mod source;
pub mod noise;

pub use source::{MAX_SAMPLES, SampledSignal, generate_sine_wave, sample_count};
pub use noise::NoiseGenerator;
