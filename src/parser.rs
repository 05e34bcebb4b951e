//! Line-oriented scraping of ping's stdout.
//!
//! This is the only module that depends on the external tool's exact
//! phrasing. Reply and loss lines from iputils, BusyBox, and macOS
//! ping are recognized; every other line (banner, summary, statistics)
//! is ignored.

use crate::sample::Sample;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// One parsed stdout line: a reply carrying a latency, or an explicit
/// loss marker (timeout / unreachable). Sequence numbers are raw as
/// printed by ping; see [`assemble_samples`] for normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeEvent {
    Reply { seq: u64, latency_ms: f64 },
    Lost { seq: u64 },
}

impl ProbeEvent {
    pub fn seq(&self) -> u64 {
        match *self {
            ProbeEvent::Reply { seq, .. } | ProbeEvent::Lost { seq } => seq,
        }
    }
}

fn reply_regex() -> &'static Regex {
    static REPLY: OnceLock<Regex> = OnceLock::new();
    REPLY.get_or_init(|| {
        // "icmp_seq=1 ttl=117 time=12.4 ms" (iputils, 1-based),
        // "seq=0 ttl=64 time=0.553 ms" (BusyBox, 0-based),
        // "icmp_seq=0 ... time=12.412 ms" (macOS, 0-based).
        Regex::new(r"seq[= ](\d+).*?time[=<]([0-9]+(?:\.[0-9]+)?) ?ms")
            .expect("failed to compile reply regex")
    })
}

fn timeout_regex() -> &'static Regex {
    static TIMEOUT: OnceLock<Regex> = OnceLock::new();
    TIMEOUT.get_or_init(|| {
        // "Request timeout for icmp_seq 3" (macOS),
        // "no answer yet for icmp_seq=2" (iputils -O).
        Regex::new(r"(?:Request timeout for|no answer yet for) icmp_seq[= ](\d+)")
            .expect("failed to compile timeout regex")
    })
}

fn error_reply_regex() -> &'static Regex {
    static ERROR_REPLY: OnceLock<Regex> = OnceLock::new();
    ERROR_REPLY.get_or_init(|| {
        // "From 192.168.1.1 icmp_seq=4 Destination Host Unreachable" and
        // the other iputils error replies of the same shape.
        Regex::new(r"^From .+ icmp_seq[= ](\d+)").expect("failed to compile error reply regex")
    })
}

/// Parse a single line of ping output. Returns `None` for lines that
/// are neither a reply nor an explicit loss marker.
pub fn parse_line(line: &str) -> Option<ProbeEvent> {
    if let Some(caps) = reply_regex().captures(line) {
        let seq = caps[1].parse().ok()?;
        let latency_ms = caps[2].parse().ok()?;
        return Some(ProbeEvent::Reply { seq, latency_ms });
    }

    if let Some(caps) = timeout_regex().captures(line) {
        let seq = caps[1].parse().ok()?;
        return Some(ProbeEvent::Lost { seq });
    }

    if let Some(caps) = error_reply_regex().captures(line) {
        let seq = caps[1].parse().ok()?;
        return Some(ProbeEvent::Lost { seq });
    }

    None
}

/// Turn raw parsed events into the ordered, 0-based sample sequence.
///
/// Sequence numbers are rebased by the minimum observed value, since
/// ping implementations disagree on the first icmp_seq (iputils starts
/// at 1, BusyBox and macOS at 0). Some ping variants print nothing at
/// all for a lost probe, so indexes never seen on stdout are filled in
/// as lost samples: up to `count` when the child terminated on its own
/// (`completed`), or only up to the highest observed index when the
/// run died early, so partial output stays a degraded result.
///
/// The first reply for an index wins; a reply always wins over a loss
/// marker for the same index (late error replies and DUP! lines).
pub fn assemble_samples(events: &[ProbeEvent], count: usize, completed: bool) -> Vec<Sample> {
    if events.is_empty() {
        return Vec::new();
    }

    let base = events.iter().map(ProbeEvent::seq).min().unwrap_or(0);
    let mut by_index: BTreeMap<usize, Option<f64>> = BTreeMap::new();

    for event in events {
        let index = (event.seq() - base) as usize;
        match *event {
            ProbeEvent::Reply { latency_ms, .. } => {
                let slot = by_index.entry(index).or_insert(Some(latency_ms));
                if slot.is_none() {
                    *slot = Some(latency_ms);
                }
            }
            ProbeEvent::Lost { .. } => {
                by_index.entry(index).or_insert(None);
            }
        }
    }

    let highest = by_index.keys().next_back().copied().unwrap_or(0);
    let horizon = if completed {
        count.max(highest + 1)
    } else {
        highest + 1
    };

    let filled = horizon - by_index.len();
    if filled > 0 {
        debug!(filled, horizon, "filling unreported probes as lost");
    }

    (0..horizon)
        .map(|index| match by_index.get(&index) {
            Some(Some(latency_ms)) => Sample::received(index, *latency_ms),
            _ => Sample::lost(index),
        })
        .collect()
}
