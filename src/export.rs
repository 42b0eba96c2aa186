//! Export projections as CSV or JSON

use crate::error::Result;
use crate::projection::QuarterlyRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write records as CSV with a header row
pub fn write_csv<W: Write>(records: &[QuarterlyRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize records as pretty-printed JSON
pub fn to_json(records: &[QuarterlyRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to a file, choosing the format from the extension (`csv` or JSON otherwise)
pub fn write_file(records: &[QuarterlyRecord], path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("json");

    match extension {
        "csv" => write_csv(records, File::create(path)?),
        _ => {
            std::fs::write(path, to_json(records)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FinancialModelParams;
    use crate::projection::run;

    fn sample() -> Vec<QuarterlyRecord> {
        run(2650.0, 10_000.0, 3, &FinancialModelParams::MODERATE).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut buffer = Vec::new();
        write_csv(&sample(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("quarter,days,investmentBalanceBeginning,markup"));
        assert!(lines[0].ends_with("qtrEndTotalValue,cumulativeROI"));
        assert!(lines[1].starts_with("1,65,10000"));
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let records = sample();
        let json = to_json(&records).unwrap();

        assert!(json.contains("\"cumulativeROI\""));
        assert!(json.contains("\"qtrEndTotalValue\""));
        let parsed: Vec<QuarterlyRecord> = serde_json::from_str(&json).unwrap();
        let quarters: Vec<u32> = parsed.iter().map(|r| r.quarter).collect();
        assert_eq!(quarters, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("projection.csv");
        let json_path = dir.path().join("projection.json");

        write_file(&sample(), &csv_path).unwrap();
        write_file(&sample(), &json_path).unwrap();

        let csv_text = std::fs::read_to_string(&csv_path).unwrap();
        let json_text = std::fs::read_to_string(&json_path).unwrap();
        assert!(csv_text.starts_with("quarter,"));
        assert!(json_text.trim_start().starts_with('['));
    }
}
