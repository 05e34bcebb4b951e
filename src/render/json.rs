//! JSON document export.

use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::Statistics;
use serde::{Deserialize, Serialize};

/// Everything one run produces, in the shape it is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub host: String,
    pub stats: Statistics,
    pub results: Vec<Sample>,
}

/// Render the run as a pretty-printed JSON document
pub fn render(host: &str, samples: &[Sample], stats: &Statistics) -> Result<String> {
    let document = Document {
        host: host.to_string(),
        stats: stats.clone(),
        results: samples.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample::received(0, 12.4),
            Sample::lost(1),
            Sample::received(2, 13.1),
        ]
    }

    #[test]
    fn test_document_round_trip() {
        let samples = samples();
        let stats = Statistics::from_samples(&samples);
        let text = render("example.com", &samples, &stats).unwrap();

        let document: Document = serde_json::from_str(&text).unwrap();
        assert_eq!(document.host, "example.com");
        assert_eq!(document.stats, stats);
        assert_eq!(document.results, samples);
    }

    #[test]
    fn test_lost_probe_serializes_as_null() {
        let samples = samples();
        let stats = Statistics::from_samples(&samples);
        let text = render("example.com", &samples, &stats).unwrap();

        assert!(text.contains("\"latency_ms\": null"));
        assert!(text.contains("\"received\": 2"));
        assert!(text.contains("\"lost\": 1"));
    }

    #[test]
    fn test_empty_run_is_well_formed() {
        let stats = Statistics::from_samples(&[]);
        let text = render("example.com", &[], &stats).unwrap();

        let document: Document = serde_json::from_str(&text).unwrap();
        assert!(document.results.is_empty());
        assert_eq!(document.stats.received, 0);
        assert_eq!(document.stats.min_ms, None);
    }
}
