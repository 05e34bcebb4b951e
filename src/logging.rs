use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt};

/// Initialize structured logging at the given level, optionally as JSON
///
/// Diagnostics always go to stderr: stdout is reserved for rendered
/// output, so `pingplot --format json host > out.json` stays clean.
/// A `RUST_LOG` value in the environment overrides `level`, e.g.
/// `RUST_LOG=pingplot=debug` scopes debug output to this crate alone.
pub fn init_logging_with_config(level: &str, json_format: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true),
            )
            .init();
    }
}
