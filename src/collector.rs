//! Sample collection via the system ping tool.
//!
//! Probing is delegated to the `ping` executable rather than raw ICMP
//! sockets, so the binary works without elevated privileges wherever
//! ping itself does. Its stdout is scraped line by line while the run
//! is in flight, which keeps the live progress display honest.

use crate::config::Config;
use crate::constants::PING_PROGRAM;
use crate::error::{PingplotError, Result};
use crate::parser::{assemble_samples, parse_line, ProbeEvent};
use crate::progress::ProgressTracker;
use crate::sample::Sample;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Trait for latency sample collection
pub trait ProbeSource: Send + Sync {
    /// Run one measurement pass and return the ordered samples
    fn collect(&mut self, config: &Config) -> Result<Vec<Sample>>;
}

/// Ping-subprocess implementation of ProbeSource
pub struct SystemPing {
    program: String,
}

impl SystemPing {
    pub fn new() -> Self {
        Self {
            program: PING_PROGRAM.to_string(),
        }
    }

    /// Use a different ping executable (tests point this at scripts)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new()
    }
}

/// Kills the child on drop, so an aborted run does not leave a ping
/// process pinging.
struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Ok(None) = self.0.try_wait() {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }
}

fn ping_args(config: &Config) -> Vec<String> {
    vec![
        "-c".to_string(),
        config.count.to_string(),
        "-i".to_string(),
        config.interval.to_string(),
        "-s".to_string(),
        config.size.to_string(),
        config.host.clone(),
    ]
}

/// Map a ping failure with no usable output onto a crate error.
///
/// ping's exit codes differ across implementations, so the stderr text
/// is the only portable signal for what went wrong.
fn classify_failure(stderr: &str, host: &str, status: ExitStatus) -> PingplotError {
    let lower = stderr.to_lowercase();
    let detail = stderr.trim();

    if lower.contains("permission denied")
        || lower.contains("operation not permitted")
        || lower.contains("privilege")
        || lower.contains("minimal interval allowed")
    {
        return PingplotError::Permission(format!(
            "ping lacks permission to probe {}: {}",
            host, detail
        ));
    }

    if lower.contains("unknown host")
        || lower.contains("name or service not known")
        || lower.contains("failure in name resolution")
        || lower.contains("could not resolve")
        || lower.contains("bad address")
    {
        return PingplotError::Config(format!("cannot resolve host '{}': {}", host, detail));
    }

    if detail.is_empty() {
        PingplotError::NoResponse(format!("no replies from {} (ping {})", host, status))
    } else {
        PingplotError::NoResponse(format!("no replies from {}: {}", host, detail))
    }
}

impl ProbeSource for SystemPing {
    fn collect(&mut self, config: &Config) -> Result<Vec<Sample>> {
        if config.count == 0 {
            debug!("Zero probes requested, nothing to run");
            return Ok(Vec::new());
        }

        debug!(
            program = %self.program,
            host = %config.host,
            count = config.count,
            interval = config.interval,
            size = config.size,
            "Spawning ping"
        );

        let child = Command::new(&self.program)
            .args(ping_args(config))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => PingplotError::Config(format!(
                    "'{}' not found; install it or adjust PATH",
                    self.program
                )),
                std::io::ErrorKind::PermissionDenied => PingplotError::Permission(format!(
                    "not allowed to execute '{}': {}",
                    self.program, e
                )),
                _ => PingplotError::Io(e),
            })?;
        let mut child = ChildGuard(child);

        let stdout = child.0.stdout.take().ok_or_else(|| {
            PingplotError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "ping stdout was not captured",
            ))
        })?;

        // Drain stderr on its own thread: a child that fills the stderr
        // pipe while we block on stdout would wedge both processes.
        let stderr_drain = child.0.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut text = String::new();
                let _ = stderr.read_to_string(&mut text);
                text
            })
        });

        let mut progress = ProgressTracker::new(config.count, config.quiet)?;
        let mut events = Vec::new();

        for line in BufReader::new(stdout).lines() {
            let line = line?;
            match parse_line(&line) {
                Some(event) => {
                    match event {
                        ProbeEvent::Reply { latency_ms, .. } => progress.record_reply(latency_ms),
                        ProbeEvent::Lost { .. } => progress.record_loss(),
                    }
                    events.push(event);
                }
                None => debug!(line = %line, "Ignoring ping output line"),
            }
        }
        progress.finish();

        let status = child.0.wait()?;
        let stderr_text = stderr_drain
            .and_then(|drain| drain.join().ok())
            .unwrap_or_default();

        if events.is_empty() && !status.success() {
            let error = classify_failure(&stderr_text, &config.host, status);
            warn!(error = %error, "ping produced no samples");
            return Err(error);
        }

        if events.is_empty() {
            warn!(host = %config.host, "ping exited cleanly but no samples were parsed");
        }

        // A signal-terminated run keeps only what was observed; an exit
        // (even a nonzero one from packet loss) accounts for all probes.
        let completed = status.code().is_some();
        let samples = assemble_samples(&events, config.count, completed);

        debug!(
            received = samples.iter().filter(|s| !s.is_lost()).count(),
            total = samples.len(),
            "Collection finished"
        );

        Ok(samples)
    }
}


#[cfg(test)]
pub use tests::MockProbeSource;
