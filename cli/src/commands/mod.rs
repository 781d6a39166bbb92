pub mod batch;
pub mod interactive;

use anyhow::{Context, Result};
use signal_toolkit::{PipelineOutput, PlotExporter};
use std::io::Write;

use crate::cli::OutputArgs;

/// Save the three figures unless plots are disabled, echoing each path
fn save_figures<W: Write>(output: &PipelineOutput, args: &OutputArgs, out: &mut W) -> Result<()> {
    if args.no_plots {
        return Ok(());
    }
    let exporter = PlotExporter::new(&args.output_dir).with_context(|| {
        format!("failed to create output directory '{}'", args.output_dir.display())
    })?;
    for path in exporter.export_pipeline(output)? {
        writeln!(out, "Saved: {}", path.display())?;
    }
    Ok(())
}

fn summarize<W: Write>(output: &PipelineOutput, out: &mut W) -> Result<()> {
    if let (Some((noisy_freq, noisy_mag)), Some((filtered_freq, filtered_mag))) =
        (output.noisy_spectrum.peak(), output.filtered_spectrum.peak())
    {
        writeln!(
            out,
            "Peak: noisy {:.2} Hz ({:.3}), filtered {:.2} Hz ({:.3})",
            noisy_freq, noisy_mag, filtered_freq, filtered_mag
        )?;
    }
    Ok(())
}
