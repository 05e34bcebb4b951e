//! CSV export, one row per probe.

use crate::error::{PingplotError, Result};
use crate::sample::Sample;
use csv::WriterBuilder;

/// Render the samples as `sequence,latency_ms` rows. Lost probes keep
/// their row with an empty latency field, so row count always matches
/// probe count.
pub fn render(samples: &[Sample]) -> Result<String> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(vec![]);

    writer.write_record(["sequence", "latency_ms"])?;
    for sample in samples {
        writer.serialize(sample)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PingplotError::Render(format!("Failed to flush csv buffer: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| PingplotError::Render(format!("csv output was not UTF-8: {}", e)))?;

    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let samples = vec![
            Sample::received(0, 12.4),
            Sample::lost(1),
            Sample::received(2, 13.1),
        ];
        let text = render(&samples).unwrap();
        assert_eq!(text, "sequence,latency_ms\n0,12.4\n1,\n2,13.1");
    }

    #[test]
    fn test_csv_round_trip() {
        let samples = vec![
            Sample::received(0, 12.4),
            Sample::lost(1),
            Sample::received(2, 0.045),
        ];
        let text = render(&samples).unwrap();

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let parsed: Vec<Sample> = reader.deserialize().map(|row| row.unwrap()).collect();
        assert_eq!(parsed, samples);
    }

    #[test]
    fn test_empty_run_keeps_header() {
        assert_eq!(render(&[]).unwrap(), "sequence,latency_ms");
    }
}
