use crate::constants::{
    FAIR_LATENCY_MS, GOOD_LATENCY_MS, LIVE_STATS_UPDATE_EVERY, LIVE_STATS_UPDATE_INTERVAL_MS,
    PROGRESS_TICK_INTERVAL_MS,
};
use crate::error::{PingplotError, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Progress bar with a live latency readout, drawn on stderr.
pub struct ProgressTracker {
    pb: ProgressBar,
    received: usize,
    lost: usize,
    latency_sum: f64,
    last_latency: Option<f64>,
    last_update: Instant,
}

impl ProgressTracker {
    /// Create a new progress tracker. The bar is hidden when `quiet`
    /// is set, so machine-oriented runs produce no terminal noise.
    pub fn new(count: usize, quiet: bool) -> Result<Self> {
        let pb = if quiet || count == 0 {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(count as u64)
        };
        pb.set_style(
            ProgressStyle::with_template(
                "{msg}\n{bar:40.cyan/blue} {pos:>7}/{len:7} [{elapsed_precise}]",
            )
            .map_err(|e| PingplotError::Render(format!("Failed to create progress style: {}", e)))?
            .progress_chars("█░"),
        );
        pb.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_INTERVAL_MS));

        Ok(Self {
            pb,
            received: 0,
            lost: 0,
            latency_sum: 0.0,
            last_latency: None,
            last_update: Instant::now(),
        })
    }

    /// Record an answered probe
    pub fn record_reply(&mut self, latency_ms: f64) {
        self.received += 1;
        self.latency_sum += latency_ms;
        self.last_latency = Some(latency_ms);
        self.advance();
    }

    /// Record a lost probe
    pub fn record_loss(&mut self) {
        self.lost += 1;
        self.advance();
    }

    fn advance(&mut self) {
        self.pb.inc(1);

        // Update live stats less frequently to avoid clutter
        let index = self.received + self.lost;
        if index % LIVE_STATS_UPDATE_EVERY == 0
            || self.last_update.elapsed().as_millis() > LIVE_STATS_UPDATE_INTERVAL_MS as u128
        {
            self.pb.set_message(self.live_stats());
            self.last_update = Instant::now();
        }
    }

    /// Render the live statistics line
    fn live_stats(&self) -> String {
        let last_part = match self.last_latency {
            Some(last) => {
                let last_str = format!("{:.1}", last);
                let last_color = if last < GOOD_LATENCY_MS {
                    last_str.green()
                } else if last < FAIR_LATENCY_MS {
                    last_str.yellow()
                } else {
                    last_str.red()
                };
                format!("→ {}ms", last_color)
            }
            None => "→ waiting".to_string(),
        };

        let mean_part = if self.received > 0 {
            let mean = self.latency_sum / self.received as f64;
            let mean_str = format!("{:.1}", mean);
            let mean_color = if mean < FAIR_LATENCY_MS {
                mean_str.green()
            } else {
                mean_str.red()
            };
            format!("Mean: {}ms", mean_color)
        } else {
            "Mean: -".to_string()
        };

        let lost_part = if self.lost > 0 {
            format!("Lost: {}", self.lost.to_string().red())
        } else {
            format!("Lost: {}", self.lost)
        };

        format!("{}  {}  {}", last_part, mean_part, lost_part)
    }

    /// Finish the progress bar and clear it from the terminal, so the
    /// rendered graph is the only thing left on screen
    pub fn finish(&mut self) {
        self.pb.set_message(self.live_stats());
        self.pb.finish_and_clear();
    }
}
