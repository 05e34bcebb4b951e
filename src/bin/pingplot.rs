use anyhow::Result;
use clap::Parser;
use colored::*;
use pingplot::{init_logging_with_config, Config, PingplotError, Rendered, SystemPing};
use tracing::{error, info};

fn main() {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize structured logging with config options
    init_logging_with_config(&config.log_level, config.is_json_format());

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("{} {}", "Configuration error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(config) {
        error!(error = %e, "Measurement failed");
        eprintln!("{} {}", "Error:".red().bold(), e);
        let code = e
            .downcast_ref::<PingplotError>()
            .map_or(1, PingplotError::exit_code);
        std::process::exit(code);
    }
}

fn run(config: Config) -> Result<()> {
    if !config.quiet {
        eprintln!(
            "{}",
            format!("Pinging {} ({} packets)...", config.host, config.count).bold()
        );
    }

    let mut source = SystemPing::new();
    let rendered = pingplot::run(&config, &mut source)?;

    match rendered {
        Rendered::Text(text) => println!("{}", text),
        Rendered::File(path) => {
            info!(path = %path.display(), "Graph written");
            eprintln!("Graph saved to: {}", path.display());
            println!("{}", path.display());
        }
    }

    Ok(())
}
