//! PNG chart rendering, available behind the `image` build feature.

use crate::error::{PingplotError, Result};
use crate::sample::Sample;
use crate::statistics::Statistics;
use std::path::Path;

#[cfg(feature = "image")]
use crate::constants::PIXELS_PER_INCH;
#[cfg(feature = "image")]
use plotters::prelude::*;

#[cfg(feature = "image")]
fn draw_error<E: std::fmt::Display>(e: E) -> PingplotError {
    PingplotError::Render(format!("Failed to draw chart: {}", e))
}

/// Plot the latency series to `path` as a PNG of `figsize` inches.
///
/// The chart carries the answered probes as a line with point markers
/// plus min/avg/max guide lines. Lost probes appear in the title count
/// rather than on the line.
#[cfg(feature = "image")]
pub fn render(
    host: &str,
    samples: &[Sample],
    stats: &Statistics,
    path: &Path,
    figsize: (u32, u32),
) -> Result<()> {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .filter_map(|s| s.latency_ms.map(|ms| (s.sequence as f64, ms)))
        .collect();

    if points.is_empty() {
        return Err(PingplotError::Render("no answered probes to plot".into()));
    }
    let (Some(min), Some(max), Some(avg)) = (stats.min_ms, stats.max_ms, stats.avg_ms) else {
        return Err(PingplotError::Render("no answered probes to plot".into()));
    };

    let size = (figsize.0 * PIXELS_PER_INCH, figsize.1 * PIXELS_PER_INCH);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let x_max = samples
        .last()
        .map(|s| s.sequence as f64)
        .unwrap_or(0.0)
        .max(1.0);
    let span = max - min;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    let y_range = (min - pad).max(0.0)..(max + pad);

    let mut title = format!("Ping Latency to {}", host);
    if stats.lost > 0 {
        title.push_str(&format!(" ({} packets lost)", stats.lost));
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Packet Sequence")
        .y_desc("Latency (ms)")
        .draw()
        .map_err(draw_error)?;

    let series_color = RGBColor(0x2e, 0x86, 0xab);
    chart
        .draw_series(LineSeries::new(points.iter().copied(), &series_color))
        .map_err(draw_error)?
        .label("Latency")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], series_color));

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, series_color.filled())),
        )
        .map_err(draw_error)?;

    let orange = RGBColor(0xff, 0xa5, 0x00);
    for (value, color, name) in [(min, GREEN, "Min"), (max, RED, "Max"), (avg, orange, "Avg")] {
        chart
            .draw_series(LineSeries::new(
                [(0.0, value), (x_max, value)],
                color.stroke_width(1),
            ))
            .map_err(draw_error)?
            .label(format!("{}: {:.2}ms", name, value))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Builds without the `image` feature refuse to plot instead of
/// producing an empty file.
#[cfg(not(feature = "image"))]
pub fn render(
    _host: &str,
    _samples: &[Sample],
    _stats: &Statistics,
    _path: &Path,
    _figsize: (u32, u32),
) -> Result<()> {
    Err(PingplotError::MissingDependency(
        "image output needs the plotters backend; rebuild with `--features image`".into(),
    ))
}
