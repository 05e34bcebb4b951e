//! Output rendering in the four supported formats.

pub mod ascii;
pub mod csv;
pub mod image;
pub mod json;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::Statistics;
use std::path::PathBuf;
use tracing::debug;

/// What a render produced: text destined for stdout, or a file written
/// to disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Text(String),
    File(PathBuf),
}

/// Render the collected samples in the configured format
pub fn render(config: &Config, samples: &[Sample], stats: &Statistics) -> Result<Rendered> {
    debug!(format = ?config.format, samples = samples.len(), "Rendering results");

    match config.format {
        OutputFormat::Ascii => Ok(Rendered::Text(ascii::render(
            samples,
            stats,
            config.width,
            config.height,
        ))),
        OutputFormat::Json => Ok(Rendered::Text(json::render(&config.host, samples, stats)?)),
        OutputFormat::Csv => Ok(Rendered::Text(csv::render(samples)?)),
        OutputFormat::Image => {
            let path = config.output_path();
            image::render(&config.host, samples, stats, &path, config.figsize()?)?;
            Ok(Rendered::File(path))
        }
    }
}
