//! Constants used throughout the application

/// Default number of probes to send
pub const DEFAULT_COUNT: usize = 100;

/// Default spacing between probes in seconds
pub const DEFAULT_INTERVAL_SECS: f64 = 0.1;

/// Default probe payload size in bytes
pub const DEFAULT_PACKET_SIZE: usize = 1400;

/// Default ASCII graph height in character rows
pub const DEFAULT_GRAPH_HEIGHT: usize = 20;

/// Default ASCII graph width in character columns
pub const DEFAULT_GRAPH_WIDTH: usize = 80;

/// Default figure size for image output, "width,height" in inches
pub const DEFAULT_FIGSIZE: &str = "12,6";

/// Largest accepted figure dimension in inches; keeps the pixel size
/// (inches * [`PIXELS_PER_INCH`]) within u32 range
pub const MAX_FIGSIZE_INCHES: u32 = 1_000;

/// Pixels rendered per figure-size inch (the original tool saved at dpi=100)
pub const PIXELS_PER_INCH: u32 = 100;

/// Name of the external probe utility
pub const PING_PROGRAM: &str = "ping";

/// Progress bar tick interval in milliseconds
pub const PROGRESS_TICK_INTERVAL_MS: u64 = 100;

/// Live statistics update interval in milliseconds
pub const LIVE_STATS_UPDATE_INTERVAL_MS: u64 = 500;

/// Number of parsed probes between live statistics refreshes
pub const LIVE_STATS_UPDATE_EVERY: usize = 10;

/// Latency below which live readouts render green (milliseconds)
pub const GOOD_LATENCY_MS: f64 = 50.0;

/// Latency below which live readouts render yellow (milliseconds)
pub const FAIR_LATENCY_MS: f64 = 150.0;
