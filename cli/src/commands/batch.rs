use anyhow::{Context, Result};
use signal_toolkit::{PipelineConfig, SignalPipeline};
use std::fs;
use std::io;
use std::path::Path;

use crate::cli::BatchArgs;

pub fn execute(args: BatchArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let mut pipeline = match args.output.seed {
        Some(seed) => SignalPipeline::with_seed(config, seed),
        None => SignalPipeline::new(config),
    };
    log::debug!("batch config: {:?}", pipeline.config());
    let output = pipeline.run().context("pipeline run failed")?;

    let mut stdout = io::stdout().lock();
    super::summarize(&output, &mut stdout)?;
    super::save_figures(&output, &args.output, &mut stdout)
}

/// Start from the config file (or defaults) and apply any explicit flags
fn resolve_config(args: &BatchArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(frequency) = args.frequency {
        config.frequency = frequency;
    }
    if let Some(duration) = args.duration {
        config.duration = duration;
    }
    if let Some(noise_level) = args.noise_level {
        config.noise_level = noise_level;
    }
    if let Some(cutoff) = args.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(sample_rate) = args.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(window) = args.window {
        config.window_size = window;
    }
    if let Some(order) = args.order {
        config.filter_order = order;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}
