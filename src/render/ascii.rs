//! Terminal latency graph.
//!
//! Columns are drawn with eighth-block glyphs so the line lands with
//! sub-row precision, and the area under it is filled solid. Lost
//! probes show up as markers on the baseline instead of vanishing.

use crate::sample::Sample;
use crate::statistics::Statistics;

/// Column tops from lowest eighth to full block.
const EIGHTH_BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const FILL_BLOCK: char = '█';
const LOST_MARKER: char = '×';

/// Render the latency series as a framed Unicode graph.
///
/// Samples are folded into at most `width` columns; a column takes the
/// maximum latency of its slice, so short spikes survive downsampling.
/// A column whose slice holds no answered probe is drawn as a loss
/// marker on the baseline.
pub fn render(samples: &[Sample], stats: &Statistics, width: usize, height: usize) -> String {
    let columns = bucket_columns(samples, width);
    let mut grid = vec![vec![' '; width]; height];

    let min = stats.min_ms.unwrap_or(0.0);
    let max = stats.max_ms.unwrap_or(0.0);
    let span = if max > min { max - min } else { 1.0 };

    for (x, column) in columns.iter().enumerate() {
        let Some(value) = column else {
            grid[height - 1][x] = LOST_MARKER;
            continue;
        };

        let level = (value - min) / span * (height as f64 - 1.0);
        let row_float = (height as f64 - 1.0) - level;
        let row = (row_float.max(0.0) as usize).min(height - 1);
        let sub = (((row_float - row as f64) * 8.0) as i64).clamp(0, 7) as usize;

        grid[row][x] = EIGHTH_BLOCKS[7 - sub];
        for fill_row in &mut grid[row + 1..] {
            fill_row[x] = FILL_BLOCK;
        }
    }

    let header = match (stats.min_ms, stats.max_ms, stats.avg_ms) {
        (Some(min), Some(max), Some(avg)) => format!(
            "Latency Graph (min: {:.2}ms, max: {:.2}ms, avg: {:.2}ms, lost: {})",
            min, max, avg, stats.lost
        ),
        _ => format!("Latency Graph (no data, lost: {})", stats.lost),
    };

    let (max_label, min_label) = match (stats.max_ms, stats.min_ms) {
        (Some(max), Some(min)) => (format!("{:.2}ms", max), format!("{:.2}ms", min)),
        _ => (String::new(), String::new()),
    };
    let y_axis_width = max_label.len().max(min_label.len());
    let padding = " ".repeat(y_axis_width);

    let mut lines = vec![header];
    lines.push(format!("{}┌{}┐", padding, "─".repeat(width)));
    for (row_idx, row) in grid.iter().enumerate() {
        let y_label = if row_idx == 0 {
            max_label.as_str()
        } else if row_idx == height - 1 {
            min_label.as_str()
        } else {
            ""
        };
        let body: String = row.iter().collect();
        lines.push(format!("{:>y_axis_width$}│{}│", y_label, body));
    }
    lines.push(format!("{}└{}┘", padding, "─".repeat(width)));
    lines.push(format!(
        "{}{}Time →",
        padding,
        " ".repeat((width / 2).saturating_sub(2))
    ));

    lines.join("\n")
}

/// Fold the samples into at most `width` columns, keeping the maximum
/// answered latency per slice. `None` means the whole slice was lost.
fn bucket_columns(samples: &[Sample], width: usize) -> Vec<Option<f64>> {
    let columns = width.min(samples.len());
    (0..columns)
        .map(|col| {
            let start = col * samples.len() / columns;
            let end = (col + 1) * samples.len() / columns;
            samples[start..end]
                .iter()
                .filter_map(|sample| sample.latency_ms)
                .fold(None, |best: Option<f64>, value| {
                    Some(best.map_or(value, |b| b.max(value)))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(latencies: &[f64]) -> Vec<Sample> {
        latencies
            .iter()
            .enumerate()
            .map(|(i, ms)| Sample::received(i, *ms))
            .collect()
    }

    fn render_for(samples: &[Sample], width: usize, height: usize) -> String {
        let stats = Statistics::from_samples(samples);
        render(samples, &stats, width, height)
    }

    #[test]
    fn test_graph_layout() {
        let graph = render_for(&received(&[10.0, 20.0, 15.0, 30.0, 5.0]), 5, 10);
        let expected = "\
Latency Graph (min: 5.00ms, max: 30.00ms, avg: 16.00ms, lost: 0)
       ┌─────┐
30.00ms│   █ │
       │   █ │
       │   █ │
       │ ▄ █ │
       │ █ █ │
       │ █▅█ │
       │ ███ │
       │▇███ │
       │████ │
 5.00ms│█████│
       └─────┘
       Time →";
        assert_eq!(graph, expected);
    }

    #[test]
    fn test_extremes_touch_top_and_bottom() {
        let graph = render_for(&received(&[10.0, 20.0, 15.0, 30.0, 5.0]), 5, 10);
        let lines: Vec<&str> = graph.lines().collect();

        // Row below the top border: only the 30ms column reaches it.
        let top_row: Vec<char> = lines[2].chars().collect();
        assert_eq!(top_row[top_row.len() - 3], '█');

        // The 5ms column paints nothing above the baseline.
        for line in &lines[2..11] {
            let body: Vec<char> = line.chars().collect();
            let cell = body[body.len() - 2];
            assert_eq!(cell, ' ', "5ms column should be empty above baseline");
        }
    }

    #[test]
    fn test_lost_probe_marked_on_baseline() {
        let samples = vec![
            Sample::received(0, 10.0),
            Sample::lost(1),
            Sample::received(2, 20.0),
        ];
        let stats = Statistics::from_samples(&samples);
        let graph = render(&samples, &stats, 3, 3);
        let lines: Vec<&str> = graph.lines().collect();

        // Baseline row is the last one inside the frame.
        assert_eq!(lines[4], "10.00ms│█×█│");
    }

    #[test]
    fn test_flat_series_sits_on_baseline() {
        let graph = render_for(&received(&[7.0, 7.0, 7.0]), 3, 5);
        let lines: Vec<&str> = graph.lines().collect();

        assert!(graph.starts_with("Latency Graph (min: 7.00ms, max: 7.00ms, avg: 7.00ms, lost: 0)"));
        assert!(lines[6].ends_with("│███│"));
        for line in &lines[2..6] {
            assert!(line.ends_with("│   │"), "rows above baseline stay empty");
        }
    }

    #[test]
    fn test_all_lost_renders_markers_without_stats() {
        let samples = vec![Sample::lost(0), Sample::lost(1)];
        let stats = Statistics::from_samples(&samples);
        let graph = render(&samples, &stats, 2, 3);

        assert!(graph.starts_with("Latency Graph (no data, lost: 2)"));
        assert!(graph.contains("××"));
    }

    #[test]
    fn test_empty_samples_render_an_empty_frame() {
        let expected = "\
Latency Graph (no data, lost: 0)
┌────┐
│    │
│    │
└────┘
Time →";
        assert_eq!(render_for(&[], 4, 2), expected);
    }

    #[test]
    fn test_downsampling_keeps_spikes() {
        let mut latencies = vec![10.0; 100];
        latencies[57] = 100.0;
        let graph = render_for(&received(&latencies), 10, 8);
        let lines: Vec<&str> = graph.lines().collect();

        // The spike lands in the sixth of ten columns and reaches the top row.
        let top_row: Vec<char> = lines[2].chars().collect();
        let frame_start = top_row.iter().position(|&c| c == '│').unwrap();
        assert_eq!(top_row[frame_start + 1 + 5], '█');
    }

    #[test]
    fn test_bucket_columns_max_and_losses() {
        let samples = vec![
            Sample::received(0, 1.0),
            Sample::received(1, 9.0),
            Sample::lost(2),
            Sample::lost(3),
        ];
        assert_eq!(bucket_columns(&samples, 2), vec![Some(9.0), None]);
        assert_eq!(
            bucket_columns(&samples, 4),
            vec![Some(1.0), Some(9.0), None, None]
        );
    }
}
