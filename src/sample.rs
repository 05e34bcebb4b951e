use serde::{Deserialize, Serialize};

/// One probe's outcome: a latency value, or a loss marker when no
/// reply arrived, tagged with its 0-based sequence position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sequence: usize,
    pub latency_ms: Option<f64>,
}

impl Sample {
    /// A probe that was answered within the tool's timeout.
    pub fn received(sequence: usize, latency_ms: f64) -> Self {
        Self {
            sequence,
            latency_ms: Some(latency_ms),
        }
    }

    /// A probe that produced no reply.
    pub fn lost(sequence: usize) -> Self {
        Self {
            sequence,
            latency_ms: None,
        }
    }

    pub fn is_lost(&self) -> bool {
        self.latency_ms.is_none()
    }
}
