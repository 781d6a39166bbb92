use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use signal_toolkit::{NoiseGenerator, PipelineConfig, SignalPipeline};
use std::io::{self, BufRead, Write};

use crate::cli::{InteractiveArgs, OutputArgs};

/// Prompt label and value used on blank input
const FIELDS: [(&str, f64); 4] = [
    ("Frequency (Hz)", 50.0),
    ("Duration (seconds)", 1.0),
    ("Noise Level (0-1)", 0.3),
    ("Low-pass Cutoff Frequency (Hz)", 60.0),
];

pub fn execute(args: InteractiveArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &args.output)
}

/// Read parameter sets until end of input, running the pipeline for each
///
/// A failing run is reported and the session moves on to the next form.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut out: W, args: &OutputArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        let Some(values) = read_form(&mut input, &mut out)? else {
            writeln!(out)?;
            return Ok(());
        };

        let values = match values {
            Ok(values) => values,
            Err(err) => {
                writeln!(out, "Error: {:#}", err)?;
                continue;
            }
        };

        let config = PipelineConfig::new(values[0], values[1], values[2], values[3]);
        let mut pipeline = SignalPipeline::with_noise(config, NoiseGenerator::from_rng(&mut rng));
        let result = pipeline
            .run()
            .map_err(anyhow::Error::from)
            .and_then(|output| {
                super::summarize(&output, &mut out)?;
                super::save_figures(&output, args, &mut out)
            });
        if let Err(err) = result {
            writeln!(out, "Error: {:#}", err)?;
        }
    }
}

/// One pass over the four prompts
///
/// `None` on end of input; the inner result carries parse failures.
fn read_form<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Result<[f64; 4]>>> {
    let mut values = [0.0; 4];
    let mut parse_error = None;

    for (slot, (label, default)) in values.iter_mut().zip(FIELDS) {
        write!(out, "{} [{}]: ", label, default)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_field(label, line.trim(), default) {
            Ok(value) => *slot = value,
            Err(err) => {
                parse_error.get_or_insert(err);
            }
        }
    }

    Ok(Some(match parse_error {
        Some(err) => Err(err),
        None => Ok(values),
    }))
}

fn parse_field(label: &str, text: &str, default: f64) -> Result<f64> {
    if text.is_empty() {
        return Ok(default);
    }
    let value: f64 = text
        .parse()
        .with_context(|| format!("{} must be a number, got '{}'", label, text))?;
    if !value.is_finite() {
        bail!("{} must be finite, got '{}'", label, text);
    }
    Ok(value)
}
