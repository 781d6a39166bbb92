use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "signal-toolkit",
    version,
    about = "Noisy sine generation, low-pass filtering and spectrum plots",
    long_about = "Generate a sine wave, add Gaussian noise, smooth it with a moving average\n\
                  and a zero-phase Butterworth low-pass, and save time-domain and FFT plots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline once from flags or a JSON config file
    Batch(BatchArgs),
    /// Prompt for parameters and run the pipeline until end of input
    Interactive(InteractiveArgs),
}

/// Where figures go and how noise is seeded
#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Directory for the PNG figures
    #[arg(long, default_value = "plots")]
    pub output_dir: PathBuf,

    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the pipeline without writing any figures
    #[arg(long)]
    pub no_plots: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// JSON file with pipeline parameters; flags given alongside override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sine frequency in Hz [default: 50]
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Signal duration in seconds [default: 1.0]
    #[arg(long)]
    pub duration: Option<f64>,

    /// Gaussian noise standard deviation [default: 0.3]
    #[arg(long)]
    pub noise_level: Option<f64>,

    /// Butterworth cutoff frequency in Hz [default: 60]
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Sample rate in Hz [default: 1000]
    #[arg(long)]
    pub sample_rate: Option<f64>,

    /// Moving-average window in samples [default: 10]
    #[arg(long)]
    pub window: Option<usize>,

    /// Butterworth filter order [default: 5]
    #[arg(long)]
    pub order: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}
