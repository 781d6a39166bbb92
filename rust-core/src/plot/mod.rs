//! PNG rendering of pipeline results
//!
//! - `render`: draw signals and spectra into in-memory PNG bytes
//! - `export`: write them to disk under timestamped names
//! - `fonts`: register the font used for captions and legends

pub mod export;
pub mod fonts;
pub mod render;

pub use export::PlotExporter;
pub use render::{PlotStyle, Trace, render_line_chart, render_signal_comparison_png, render_spectrum_png};
