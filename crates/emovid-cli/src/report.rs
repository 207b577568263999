use anyhow::Context;
use emovid_infer::EmotionLabel;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One sampled-frame prediction. `time` is seconds as a fixed
/// two-decimal string, deliberately text and not a JSON number.
#[derive(Debug, Serialize)]
pub struct PredictionRecord {
    pub time: String,
    pub emotion: EmotionLabel,
}

impl PredictionRecord {
    pub fn new(timestamp_ms: f64, emotion: EmotionLabel) -> Self {
        Self {
            time: format_seconds(timestamp_ms),
            emotion,
        }
    }
}

/// Milliseconds to a two-decimal seconds string.
///
/// Uses Rust's `{:.2}` float formatting, which rounds half to even
/// (125 ms -> "0.12", 375 ms -> "0.38"). Negative inputs clamp to zero;
/// decoders should never report them.
pub fn format_seconds(timestamp_ms: f64) -> String {
    let secs = (timestamp_ms / 1000.0).max(0.0);
    format!("{secs:.2}")
}

/// Accumulates records in sampling order and writes them once, at end of
/// run, as a 2-space-indented JSON array.
#[derive(Default)]
pub struct ResultWriter {
    records: Vec<PredictionRecord>,
}

impl ResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PredictionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating output file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records)
            .with_context(|| format!("writing {}", path.display()))?;
        // Flush explicitly so write errors surface here instead of being
        // swallowed by BufWriter's drop.
        writer
            .flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_two_decimals() {
        assert_eq!(format_seconds(0.0), "0.00");
        assert_eq!(format_seconds(1000.0), "1.00");
        assert_eq!(format_seconds(9900.0), "9.90");
        assert_eq!(format_seconds(1234.0), "1.23");
    }

    #[test]
    fn test_format_seconds_rounds_half_to_even() {
        // 0.125 and 0.375 are exactly representable in binary.
        assert_eq!(format_seconds(125.0), "0.12");
        assert_eq!(format_seconds(375.0), "0.38");
    }

    #[test]
    fn test_format_seconds_clamps_negative() {
        assert_eq!(format_seconds(-5.0), "0.00");
    }

    #[test]
    fn test_record_serialization() {
        let record = PredictionRecord::new(1500.0, EmotionLabel::Neutral);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"time":"1.50","emotion":"Neutral"}"#);
    }

    #[test]
    fn test_empty_writer_serializes_to_empty_array() {
        let writer = ResultWriter::new();
        let json = serde_json::to_string(writer.records()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_write_to_surfaces_write_errors() {
        // /dev/full accepts the open but fails every write with ENOSPC.
        // A sequence this small fits the BufWriter buffer, so the failure
        // only shows up at flush time.
        let mut writer = ResultWriter::new();
        writer.push(PredictionRecord::new(0.0, EmotionLabel::Anger));
        assert!(writer.write_to(std::path::Path::new("/dev/full")).is_err());
    }

    #[test]
    fn test_write_to_produces_indented_json_array() {
        let mut writer = ResultWriter::new();
        writer.push(PredictionRecord::new(0.0, EmotionLabel::Anger));
        writer.push(PredictionRecord::new(1000.0, EmotionLabel::Focus));

        let path = std::env::temp_dir().join("emovid_report_test.json");
        writer.write_to(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // serde_json pretty output indents with two spaces.
        assert!(text.contains("  {"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["time"], "0.00");
        assert_eq!(array[1]["emotion"], "Focus");
    }
}
