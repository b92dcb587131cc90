//! Import and export
//!
//! Serializes the full store to an indented JSON file and parses
//! uploaded JSON back into quote records. Import is additive: parsed
//! records are appended to the existing store, with no deduplication
//! and no field validation.

use std::path::Path;

use serde_json::Value;

use crate::error::{QuoteError, QuoteResult};
use crate::models::QuoteRecord;
use crate::storage::StorageError;

/// Default export file name
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Serialize records as indented JSON text
pub fn export_json(records: &[QuoteRecord]) -> QuoteResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the export snapshot to a file
pub fn export_to_file(records: &[QuoteRecord], path: &Path) -> QuoteResult<()> {
    let data = export_json(records)?;
    std::fs::write(path, data)
        .map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;
    Ok(())
}

/// Parse uploaded file content into quote records
///
/// The top-level value must be a JSON array; anything else is a format
/// error and nothing is imported. Array elements are accepted leniently:
/// a missing or non-string `text`/`category` field becomes an empty
/// string rather than rejecting the record, matching the original's
/// validation-free import.
pub fn parse_import(content: &str) -> QuoteResult<Vec<QuoteRecord>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| QuoteError::Format(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(QuoteError::Format("expected a JSON array".to_string()));
    };

    Ok(items.into_iter().map(lenient_record).collect())
}

/// Read a string field, defaulting to empty when absent or mistyped
fn lenient_record(item: Value) -> QuoteRecord {
    let field = |name: &str| {
        item.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    QuoteRecord::new(field("text"), field("category"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord::new("Believe in yourself!", "Motivation"),
            QuoteRecord::new("Learning never exhausts the mind.", "Education"),
        ]
    }

    #[test]
    fn test_export_is_indented() {
        let json = export_json(&sample()).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"text\": \"Believe in yourself!\""));
    }

    #[test]
    fn test_export_import_round_trip() {
        let original = sample();
        let exported = export_json(&original).unwrap();
        let imported = parse_import(&exported).unwrap();

        assert_eq!(imported, original);
    }

    #[test]
    fn test_export_to_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(EXPORT_FILE_NAME);

        export_to_file(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_import(&content).unwrap(), sample());
    }

    #[test]
    fn test_import_rejects_non_array() {
        let err = parse_import("{\"text\": \"not a list\"}").unwrap_err();
        assert!(matches!(err, QuoteError::Format(_)));

        let err = parse_import("not json at all").unwrap_err();
        assert!(matches!(err, QuoteError::Format(_)));
    }

    #[test]
    fn test_import_empty_array() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn test_import_accepts_malformed_records() {
        let raw = r#"[
            {"text": "complete", "category": "Ok"},
            {"text": "missing category"},
            {"category": "missing text"},
            {"text": 42, "category": null},
            {}
        ]"#;

        let records = parse_import(raw).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0], QuoteRecord::new("complete", "Ok"));
        assert_eq!(records[1], QuoteRecord::new("missing category", ""));
        assert_eq!(records[2], QuoteRecord::new("", "missing text"));
        assert_eq!(records[3], QuoteRecord::new("", ""));
        assert_eq!(records[4], QuoteRecord::new("", ""));
    }
}
