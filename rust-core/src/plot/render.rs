//! Line charts rendered into in-memory PNG images
//!
//! Charts are drawn on an RGB bitmap and encoded with `image`, so nothing
//! touches the filesystem until the exporter writes the bytes out.

use super::fonts::{FONT_FAMILY, labels_available};
use crate::error::{Result, SignalError};
use crate::pipeline::PipelineOutput;
use crate::spectrum::Spectrum;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use std::io::Cursor;

/// Canvas size and look shared by every figure
#[derive(Clone, Debug)]
pub struct PlotStyle {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    pub background: RGBColor,

    /// Draw caption, axis descriptions and legend when a font is available
    pub labels: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 480,
            background: WHITE,
            labels: true,
        }
    }
}

/// One line on a chart: y-values sharing the chart's x axis
pub struct Trace<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
    pub style: ShapeStyle,
}

/// Noisy, moving-average and Butterworth signals overlaid against time
pub fn render_signal_comparison_png(output: &PipelineOutput, style: &PlotStyle) -> Result<Vec<u8>> {
    let traces = [
        Trace {
            label: "Noisy Signal",
            values: output.noisy.samples(),
            style: BLUE.mix(0.6).stroke_width(1),
        },
        Trace {
            label: "Moving Average",
            values: output.moving_average.samples(),
            style: RED.mix(0.8).stroke_width(1),
        },
        Trace {
            label: "Butterworth Filtered",
            values: output.butterworth.samples(),
            style: GREEN.stroke_width(2),
        },
    ];
    render_line_chart(
        "Signal Filtering Comparison",
        "Time [s]",
        "Amplitude",
        output.time(),
        &traces,
        false,
        style,
    )
}

/// Magnitude against frequency
pub fn render_spectrum_png(spectrum: &Spectrum, title: &str, style: &PlotStyle) -> Result<Vec<u8>> {
    let traces = [Trace {
        label: title,
        values: &spectrum.magnitudes,
        style: BLUE.stroke_width(1),
    }];
    render_line_chart(
        title,
        "Frequency [Hz]",
        "Magnitude",
        &spectrum.frequencies,
        &traces,
        true,
        style,
    )
}

/// Draw `traces` against `x` into an RGB bitmap and encode it as PNG
///
/// Captions, axis descriptions and the legend are drawn when `style.labels`
/// is set and a font could be registered; otherwise only traces and grid.
pub fn render_line_chart(
    title: &str,
    x_desc: &str,
    y_desc: &str,
    x: &[f64],
    traces: &[Trace<'_>],
    zero_based: bool,
    style: &PlotStyle,
) -> Result<Vec<u8>> {
    if x.is_empty() || traces.is_empty() {
        return Err(SignalError::Plot(format!("{title}: nothing to draw")));
    }
    if let Some(trace) = traces.iter().find(|t| t.values.len() != x.len()) {
        return Err(SignalError::Plot(format!(
            "{}: {} values against {} x positions",
            trace.label,
            trace.values.len(),
            x.len()
        )));
    }

    let x_range = padded_range(x.iter().copied(), 0.0);
    let y_range = padded_range(traces.iter().flat_map(|t| t.values.iter().copied()), 0.05);
    let y_range = if zero_based {
        0.0..y_range.end.max(1e-3)
    } else {
        y_range
    };

    let labelled = style.labels && labels_available();

    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(15);
        if labelled {
            builder
                .caption(title, (FONT_FAMILY, 22).into_font())
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .set_label_area_size(LabelAreaPosition::Bottom, 45);
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.light_line_style(&BLACK.mix(0.05));
            if labelled {
                mesh.label_style((FONT_FAMILY, 13))
                    .axis_desc_style((FONT_FAMILY, 15))
                    .x_desc(x_desc)
                    .y_desc(y_desc);
            } else {
                mesh.x_labels(0).y_labels(0);
            }
            mesh.draw()?;
        }

        for trace in traces {
            let series = x.iter().copied().zip(trace.values.iter().copied());
            let annotation = chart.draw_series(LineSeries::new(series, trace.style))?;
            if labelled {
                let legend_style = trace.style;
                annotation
                    .label(trace.label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], legend_style));
            }
        }

        if labelled {
            chart
                .configure_series_labels()
                .label_font((FONT_FAMILY, 13))
                .border_style(&BLACK.mix(0.3))
                .background_style(&WHITE.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}

/// Min..max of the values, widened by `margin` of the span; flat data gets ±1
fn padded_range(values: impl Iterator<Item = f64>, margin: f64) -> std::ops::Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }
    let span = max - min;
    if span < f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    (min - margin * span)..(max + margin * span)
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| SignalError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{PipelineConfig, SignalPipeline};

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn small_style() -> PlotStyle {
        PlotStyle {
            width: 320,
            height: 160,
            ..PlotStyle::default()
        }
    }

    #[test]
    fn test_plotting_helpers_return_png() {
        let config = PipelineConfig::new(50.0, 0.5, 0.2, 60.0);
        let output = SignalPipeline::with_seed(config, 3).run().unwrap();

        let png_wave = render_signal_comparison_png(&output, &small_style()).unwrap();
        let png_fft = render_spectrum_png(&output.noisy_spectrum, "Noisy Signal Spectrum", &small_style()).unwrap();
        assert!(png_wave.starts_with(&PNG_MAGIC));
        assert!(png_fft.starts_with(&PNG_MAGIC));

        let decoded = image::load_from_memory(&png_wave).unwrap();
        assert_eq!(decoded.width(), 320);
        assert_eq!(decoded.height(), 160);
    }

    #[test]
    fn test_labelled_render_succeeds() {
        let config = PipelineConfig::new(50.0, 0.5, 0.2, 60.0);
        let output = SignalPipeline::with_seed(config, 3).run().unwrap();

        let labelled = render_signal_comparison_png(&output, &small_style()).unwrap();
        let plain = render_signal_comparison_png(
            &output,
            &PlotStyle {
                labels: false,
                ..small_style()
            },
        )
        .unwrap();
        assert!(labelled.starts_with(&PNG_MAGIC));
        assert!(plain.starts_with(&PNG_MAGIC));

        // With a registered font the caption and label areas change the image
        if labels_available() {
            let labelled = image::load_from_memory(&labelled).unwrap().to_rgb8();
            let plain = image::load_from_memory(&plain).unwrap().to_rgb8();
            assert_ne!(labelled.as_raw(), plain.as_raw());
        }
    }

    #[test]
    fn test_flat_signal_still_renders() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y = vec![0.0; 10];
        let traces = [Trace {
            label: "flat",
            values: &y,
            style: BLACK.stroke_width(1),
        }];
        let png = render_line_chart("flat", "x", "y", &x, &traces, false, &small_style()).unwrap();
        assert!(png.starts_with(&PNG_MAGIC));
    }

    #[test]
    fn test_mismatched_trace_rejected() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![0.0, 1.0];
        let traces = [Trace {
            label: "short",
            values: &y,
            style: BLACK.stroke_width(1),
        }];
        assert!(matches!(
            render_line_chart("t", "x", "y", &x, &traces, false, &small_style()),
            Err(SignalError::Plot(_))
        ));
        assert!(render_line_chart("t", "x", "y", &[], &[], false, &small_style()).is_err());
    }

    #[test]
    fn test_padded_range_handles_flat_and_empty() {
        assert_eq!(padded_range([2.0, 2.0].into_iter(), 0.1), 1.0..3.0);
        assert_eq!(padded_range(std::iter::empty(), 0.1), -1.0..1.0);
        let range = padded_range([0.0, 10.0].into_iter(), 0.1);
        assert_eq!(range, -1.0..11.0);
    }
}
