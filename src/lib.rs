//! Pingplot - ping latency measurement and plotting tool
//!
//! This library drives the system ping tool to probe a host, collects
//! per-probe latencies, and renders them as a terminal graph, JSON,
//! CSV, or a PNG chart.

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod progress;
pub mod render;
pub mod sample;
pub mod statistics;

pub use collector::{ProbeSource, SystemPing};
pub use config::{Config, OutputFormat};
pub use error::{PingplotError, Result};
pub use logging::init_logging_with_config;
pub use progress::ProgressTracker;
pub use render::Rendered;
pub use sample::Sample;
pub use statistics::Statistics;

use tracing::info;

/// Run one measurement pass end to end: collect samples from the probe
/// source, summarize them, and render the configured output.
pub fn run(config: &Config, source: &mut dyn ProbeSource) -> Result<Rendered> {
    let samples = source.collect(config)?;
    let stats = Statistics::from_samples(&samples);

    info!(
        host = %config.host,
        received = stats.received,
        lost = stats.lost,
        "Measurement complete"
    );

    render::render(config, &samples, &stats)
}
