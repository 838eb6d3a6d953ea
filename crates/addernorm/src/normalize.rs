//! Per-line normalization of source data rows.

use crate::header::HeaderMap;
use crate::tokens::Tokenizer;
use adder_common::{InputKey, Row};
use serde::Serialize;

/// Why a data line did not produce a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Token count differs from the header's column count
    WidthMismatch { expected: usize, found: usize },
    /// An input field is not a bit, so the row has no place in the key space
    NonBinaryInput { key: InputKey },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Row(Row),
    Skip(SkipReason),
}

/// Clean, width-check and permute one data line.
pub fn normalize_line(line: &str, header: &HeaderMap, tokenizer: &Tokenizer) -> LineOutcome {
    let tokens = tokenizer.fields(line);

    let Some(row) = header.apply(&tokens) else {
        return LineOutcome::Skip(SkipReason::WidthMismatch {
            expected: header.source_width(),
            found: tokens.len(),
        });
    };

    let key = row.input_key();
    if !key.is_binary() {
        return LineOutcome::Skip(SkipReason::NonBinaryInput { key });
    }

    LineOutcome::Row(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_common::idx;

    const HEADER: &str =
        "idx\tt\t$OA0\t$OA1\t$OA2\t$OA3\t$OB0\t$OB1\t$OB2\t$OB3\t$OM\t$OS0\t$OS1\t$OS2\t$OS3\t$OCout";

    fn header() -> HeaderMap {
        HeaderMap::parse(HEADER, &Tokenizer::default()).unwrap()
    }

    #[test]
    fn test_well_formed_line_becomes_row() {
        let line = "7\t70\t1\t0\t0\t0\t1\t0\t0\t0\t1\t1\t1\t0\t0\t0";
        match normalize_line(line, &header(), &Tokenizer::default()) {
            LineOutcome::Row(row) => {
                assert_eq!(row.input_key().as_str(), "100010001");
                assert_eq!(row.get(idx::S[1]), Some("1"));
            }
            other => panic!("expected row, got {:?}", other),
        }
    }

    #[test]
    fn test_marked_values_are_cleaned() {
        let line = "0\t0\t$O1\t$O0\t$O0\t$O0\t$O0\t$O0\t$O0\t$O0\t$O0\t$O1\t$O0\t$O0\t$O0\t$O0";
        let outcome = normalize_line(line, &header(), &Tokenizer::default());
        assert!(matches!(outcome, LineOutcome::Row(ref r) if r.get(idx::A[0]) == Some("1")));
    }

    #[test]
    fn test_short_line_is_skipped() {
        let line = "0\t0\t1\t0\t0";
        assert_eq!(
            normalize_line(line, &header(), &Tokenizer::default()),
            LineOutcome::Skip(SkipReason::WidthMismatch {
                expected: 14,
                found: 3
            })
        );
    }

    #[test]
    fn test_blank_line_is_skipped() {
        let outcome = normalize_line("", &header(), &Tokenizer::default());
        assert!(matches!(
            outcome,
            LineOutcome::Skip(SkipReason::WidthMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn test_non_binary_input_is_skipped() {
        let line = "0\t0\tx\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0";
        let outcome = normalize_line(line, &header(), &Tokenizer::default());
        assert!(matches!(
            outcome,
            LineOutcome::Skip(SkipReason::NonBinaryInput { .. })
        ));
    }

    #[test]
    fn test_non_binary_output_is_kept() {
        let line = "0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t?\t?\t?\t?\t?";
        let outcome = normalize_line(line, &header(), &Tokenizer::default());
        assert!(matches!(outcome, LineOutcome::Row(ref r) if r.has_placeholder()));
    }
}
