//! Header-keyed reading of the canonical CSV.

use adder_common::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One data row as (column, value) pairs in header order.
///
/// Short rows simply lack their trailing columns; extra values past the
/// header are dropped. Both cases surface later as per-row findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedRow {
    /// 1-based data row number, header excluded
    pub number: usize,
    pub fields: Vec<(String, String)>,
}

impl RecordedRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

pub fn read_table<R: Read>(input: R) -> Result<Vec<RecordedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        rows.push(RecordedRow {
            number: idx + 1,
            fields,
        });
    }

    Ok(rows)
}

pub fn read_table_file(path: &Path) -> Result<Vec<RecordedRow>> {
    let file = File::open(path)?;
    read_table(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_keyed_by_header() {
        let rows = read_table("M,A0\n1,0\n0,1\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("M"), Some("1"));
        assert_eq!(rows[1].get("A0"), Some("1"));
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[0].get("Cout"), None);
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let rows = read_table("A0,A1,A2\n1\n".as_bytes()).unwrap();
        assert_eq!(rows[0].get("A0"), Some("1"));
        assert_eq!(rows[0].get("A2"), None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_table_file(&dir.path().join("nope.csv")).is_err());
    }
}
