//! Row-by-row verification of recorded outputs.
//!
//! Every row is checked. A row either passes, disagrees with the reference
//! adder (a discrepancy) or cannot be read (an error record); neither kind
//! of problem stops the pass.

use crate::arithmetic::expected_outputs;
use crate::reader::{read_table_file, RecordedRow};
use adder_common::{INPUT_FIELDS, INPUT_SPACE, OUTPUT_FIELDS, OUTPUT_WIDTH};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a row could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("invalid bit '{value}' in field '{field}'")]
    InvalidBit { field: String, value: String },
}

/// Recorded outputs that differ from the reference adder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub row: usize,
    /// Raw A0..A3, B0..B3, M values
    pub inputs: Vec<String>,
    /// S0..S3, Cout
    pub expected: [u8; OUTPUT_WIDTH],
    pub actual: [u8; OUTPUT_WIDTH],
}

/// A row that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub fields: Vec<(String, String)>,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    Discrepancy(Discrepancy),
    Error(RowError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub rows_checked: usize,
    pub findings: Vec<Finding>,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.findings.len()
    }

    pub fn discrepancies(&self) -> impl Iterator<Item = &Discrepancy> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Discrepancy(d) => Some(d),
            Finding::Error(_) => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &RowError> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Error(e) => Some(e),
            Finding::Discrepancy(_) => None,
        })
    }
}

fn read_bit(row: &RecordedRow, field: &str) -> Result<u8, FieldError> {
    let value = row.get(field).ok_or_else(|| FieldError::MissingField {
        field: field.to_string(),
    })?;
    match value {
        "0" => Ok(0),
        "1" => Ok(1),
        _ => Err(FieldError::InvalidBit {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn read_bits<const N: usize>(row: &RecordedRow, fields: &[&str]) -> Result<[u8; N], FieldError> {
    let mut bits = [0u8; N];
    for (bit, field) in bits.iter_mut().zip(fields) {
        *bit = read_bit(row, field)?;
    }
    Ok(bits)
}

/// Compare one row's recorded outputs with the reference adder.
/// `Ok(None)` means the row is correct.
pub fn check_row(row: &RecordedRow) -> Result<Option<Discrepancy>, FieldError> {
    let a: [u8; 4] = read_bits(row, &INPUT_FIELDS[0..4])?;
    let b: [u8; 4] = read_bits(row, &INPUT_FIELDS[4..8])?;
    let carry_in = read_bit(row, INPUT_FIELDS[8])?;

    let expected = expected_outputs(&a, &b, carry_in);
    let actual: [u8; OUTPUT_WIDTH] = read_bits(row, &OUTPUT_FIELDS)?;

    if actual == expected {
        return Ok(None);
    }

    Ok(Some(Discrepancy {
        row: row.number,
        inputs: INPUT_FIELDS
            .iter()
            .map(|f| row.get(f).unwrap_or_default().to_string())
            .collect(),
        expected,
        actual,
    }))
}

pub fn verify_rows(rows: &[RecordedRow]) -> VerificationReport {
    let mut report = VerificationReport {
        rows_checked: rows.len(),
        findings: Vec::new(),
    };

    for row in rows {
        match check_row(row) {
            Ok(None) => {}
            Ok(Some(discrepancy)) => {
                debug!("[VERIFY] Row {} disagrees: {:?}", row.number, discrepancy);
                report.findings.push(Finding::Discrepancy(discrepancy));
            }
            Err(err) => {
                debug!("[VERIFY] Row {} unreadable: {}", row.number, err);
                report.findings.push(Finding::Error(RowError {
                    row: row.number,
                    fields: row.fields.clone(),
                    error: err.to_string(),
                }));
            }
        }
    }

    info!(
        "[VERIFY] Checked {} rows, {} problems",
        report.rows_checked,
        report.problem_count()
    );
    report
}

/// Read the canonical CSV at `path` and verify every row.
pub fn verify_file(path: &Path) -> adder_common::Result<VerificationReport> {
    info!("[VERIFY] Reading {}", path.display());
    let rows = read_table_file(path)?;
    if rows.len() != INPUT_SPACE {
        warn!(
            "[VERIFY] Table has {} rows; a complete table has {}",
            rows.len(),
            INPUT_SPACE
        );
    }
    Ok(verify_rows(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_common::CANONICAL_HEADER;

    fn recorded(values: &str) -> RecordedRow {
        RecordedRow {
            number: 1,
            fields: CANONICAL_HEADER
                .iter()
                .zip(values.split(','))
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_correct_row_passes() {
        assert_eq!(check_row(&recorded("1,0,0,0,1,0,0,0,1,1,1,0,0,0")), Ok(None));
    }

    #[test]
    fn test_flipped_carry_is_discrepancy() {
        let found = check_row(&recorded("1,1,1,1,1,1,1,1,1,1,1,1,1,0"))
            .unwrap()
            .unwrap();
        assert_eq!(found.expected, [1, 1, 1, 1, 1]);
        assert_eq!(found.actual, [1, 1, 1, 1, 0]);
        assert_eq!(found.inputs, vec!["1"; 9]);
    }

    #[test]
    fn test_placeholder_is_field_error() {
        let err = check_row(&recorded("0,0,0,0,0,0,0,0,0,?,0,0,0,0")).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidBit {
                field: "S0".to_string(),
                value: "?".to_string()
            }
        );
    }

    #[test]
    fn test_missing_column_is_field_error() {
        let err = check_row(&recorded("0,0,0")).unwrap_err();
        assert!(matches!(err, FieldError::MissingField { ref field } if field == "A3"));
    }

    #[test]
    fn test_report_collects_both_kinds() {
        let rows = vec![
            recorded("0,0,0,0,0,0,0,0,0,0,0,0,0,0"),
            recorded("0,0,0,0,0,0,0,0,1,0,0,0,0,0"),
            recorded("0,0,0,0,0,0,0,0,x,0,0,0,0,0"),
        ];
        let report = verify_rows(&rows);
        assert_eq!(report.rows_checked, 3);
        assert_eq!(report.problem_count(), 2);
        assert_eq!(report.discrepancies().count(), 1);
        assert_eq!(report.errors().count(), 1);
        assert!(!report.is_success());
    }

    #[test]
    fn test_empty_table_is_success() {
        let report = verify_rows(&[]);
        assert!(report.is_success());
        assert_eq!(report.rows_checked, 0);
    }
}
