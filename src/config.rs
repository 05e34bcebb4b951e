//! CLI configuration
//!
//! Provides argument parsing and validation for the pingplot binary.

use crate::constants::{
    DEFAULT_COUNT, DEFAULT_FIGSIZE, DEFAULT_GRAPH_HEIGHT, DEFAULT_GRAPH_WIDTH,
    DEFAULT_INTERVAL_SECS, DEFAULT_PACKET_SIZE, MAX_FIGSIZE_INCHES,
};
use crate::error::{PingplotError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// How the collected samples are rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Unicode graph drawn on stdout
    Ascii,
    /// Machine-readable document on stdout
    Json,
    /// `sequence,latency_ms` rows on stdout
    Csv,
    /// PNG chart written to a file (requires the `image` build feature)
    Image,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "pingplot")]
#[command(about = "Visualize ping latency as a graph")]
pub struct Config {
    /// Host to ping (name or address)
    pub host: String,

    /// Number of probes to send
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seconds between probes
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: f64,

    /// Probe payload size in bytes
    #[arg(short, long, default_value_t = DEFAULT_PACKET_SIZE)]
    pub size: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,

    /// Graph height in rows (ascii format)
    #[arg(long, default_value_t = DEFAULT_GRAPH_HEIGHT)]
    pub height: usize,

    /// Graph width in columns (ascii format)
    #[arg(long, default_value_t = DEFAULT_GRAPH_WIDTH)]
    pub width: usize,

    /// Output file for the image format (default: pingplot_<host>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image size in inches as WIDTH,HEIGHT (image format)
    #[arg(long, default_value = DEFAULT_FIGSIZE)]
    pub figsize: String,

    /// Disable the live progress display
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,
}

impl Config {
    /// Validates the configuration values
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.host.trim().is_empty() {
            return Err(PingplotError::Config("host must not be empty".into()));
        }

        // NaN fails this comparison too, so it is rejected along with <= 0.
        if !(self.interval > 0.0) {
            return Err(PingplotError::Config("interval must be > 0".into()));
        }

        if self.height == 0 {
            return Err(PingplotError::Config("height must be > 0".into()));
        }

        if self.width == 0 {
            return Err(PingplotError::Config("width must be > 0".into()));
        }

        // Surface a malformed --figsize before any probe is sent.
        self.figsize()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(PingplotError::Config(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        debug!("Configuration validated successfully");
        Ok(())
    }

    /// Parses `--figsize` into (width, height) in inches
    pub fn figsize(&self) -> Result<(u32, u32)> {
        let mut parts = self.figsize.split(',');
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PingplotError::Config(format!(
                "figsize must be WIDTH,HEIGHT, got '{}'",
                self.figsize
            )));
        };

        let parse = |part: &str| -> Result<u32> {
            let value: u32 = part.trim().parse().map_err(|_| {
                PingplotError::Config(format!(
                    "figsize must be WIDTH,HEIGHT, got '{}'",
                    self.figsize
                ))
            })?;
            if value == 0 {
                return Err(PingplotError::Config("figsize dimensions must be > 0".into()));
            }
            if value > MAX_FIGSIZE_INCHES {
                return Err(PingplotError::Config(format!(
                    "figsize dimensions must be at most {MAX_FIGSIZE_INCHES} inches"
                )));
            }
            Ok(value)
        };

        Ok((parse(width)?, parse(height)?))
    }

    /// Returns the image output path, deriving `pingplot_<host>.png`
    /// from the host when `-o` was not given
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let safe: String = self
                .host
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            PathBuf::from(format!("pingplot_{safe}.png"))
        })
    }

    /// Returns true if JSON format logging is enabled
    pub fn is_json_format(&self) -> bool {
        self.log_format.to_lowercase() == "json"
    }
}
