//! Timestamped PNG files for each pipeline run

use super::render::{PlotStyle, render_signal_comparison_png, render_spectrum_png};
use crate::error::Result;
use crate::pipeline::PipelineOutput;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Timestamp format appended to every file stem
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes rendered figures into one output directory
#[derive(Debug, Clone)]
pub struct PlotExporter {
    output_dir: PathBuf,
    style: PlotStyle,
}

impl PlotExporter {
    /// Exporter writing into `output_dir`, created if missing
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            style: PlotStyle::default(),
        })
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `png` as `<dir>/<stem>_<YYYYmmdd_HHMMSS>.png`
    ///
    /// Existing files are never overwritten: a second save within the same
    /// second gets `_1`, `_2`, ... appended to the timestamp.
    pub fn save(&self, stem: &str, png: &[u8]) -> Result<PathBuf> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let mut suffix = 0usize;
        loop {
            let name = match suffix {
                0 => format!("{stem}_{timestamp}.png"),
                n => format!("{stem}_{timestamp}_{n}.png"),
            };
            let path = self.output_dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(png)?;
                    log::info!("saved plot to {}", path.display());
                    return Ok(path);
                }
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => suffix += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Render and save the comparison plot and both spectra
    ///
    /// # Returns
    /// Paths in order: signal comparison, noisy spectrum, filtered spectrum
    pub fn export_pipeline(&self, output: &PipelineOutput) -> Result<Vec<PathBuf>> {
        let figures = [
            ("signal_comparison", render_signal_comparison_png(output, &self.style)?),
            (
                "noisy_fft",
                render_spectrum_png(&output.noisy_spectrum, "Noisy Signal Spectrum", &self.style)?,
            ),
            (
                "filtered_fft",
                render_spectrum_png(&output.filtered_spectrum, "Butterworth Filtered Spectrum", &self.style)?,
            ),
        ];

        figures
            .iter()
            .map(|(stem, png)| self.save(stem, png))
            .collect()
    }
}
