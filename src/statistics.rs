//! Latency summary statistics.

use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Aggregate view of a measurement run. The latency fields are `None`
/// when no probe was answered, so an all-lost run still serializes and
/// renders without inventing numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub received: usize,
    pub lost: usize,
    pub min_ms: Option<f64>,
    pub max_ms: Option<f64>,
    pub avg_ms: Option<f64>,
}

impl Statistics {
    /// Compute statistics in a single pass over the samples.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut received = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;

        for sample in samples {
            if let Some(latency) = sample.latency_ms {
                received += 1;
                sum += latency;
                min = min.min(latency);
                max = max.max(latency);
            }
        }

        if received == 0 {
            return Self {
                received: 0,
                lost: samples.len(),
                min_ms: None,
                max_ms: None,
                avg_ms: None,
            };
        }

        Self {
            received,
            lost: samples.len() - received,
            min_ms: Some(min),
            max_ms: Some(max),
            avg_ms: Some(sum / received as f64),
        }
    }
}
