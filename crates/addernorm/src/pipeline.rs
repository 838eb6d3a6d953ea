//! End-to-end normalization: source dump in, canonical table out.

use crate::arithmetic::fill_outputs;
use crate::completion::complete;
use crate::dedup::dedup_first_seen;
use crate::header::HeaderMap;
use crate::normalize::{normalize_line, LineOutcome, SkipReason};
use crate::sort::sort_canonical;
use crate::tokens::Tokenizer;
use crate::writer::write_table_file;
use adder_common::{AdderConfig, Result, Row, TableError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Per-stage counts of one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeSummary {
    /// Lines after the header
    pub data_lines: usize,
    pub malformed_skipped: usize,
    pub non_binary_skipped: usize,
    pub duplicates_dropped: usize,
    pub synthesized: usize,
    pub rows_written: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub rows: Vec<Row>,
    pub summary: NormalizeSummary,
}

/// Run every stage except writing. `source` names the input in errors.
pub fn normalize_text(source: &Path, text: &str, tokenizer: &Tokenizer) -> Result<NormalizedTable> {
    let mut lines = text.lines();
    let header_line = lines.next().ok_or_else(|| TableError::EmptyInput {
        path: source.to_path_buf(),
    })?;
    let header = HeaderMap::parse(header_line, tokenizer)?;
    debug!(
        "[HEADER] {} source columns, index map {:?}",
        header.source_width(),
        header.index_map()
    );

    let mut summary = NormalizeSummary::default();
    let mut parsed = Vec::new();

    for (offset, line) in lines.enumerate() {
        summary.data_lines += 1;
        match normalize_line(line, &header, tokenizer) {
            LineOutcome::Row(row) => parsed.push(row),
            LineOutcome::Skip(reason) => {
                // Header is line 1
                debug!("[NORMALIZE] Skipping line {}: {:?}", offset + 2, reason);
                match reason {
                    SkipReason::WidthMismatch { .. } => summary.malformed_skipped += 1,
                    SkipReason::NonBinaryInput { .. } => summary.non_binary_skipped += 1,
                }
            }
        }
    }

    let deduped = dedup_first_seen(parsed);
    summary.duplicates_dropped = deduped.duplicates;

    let mut rows = deduped.rows;
    summary.synthesized = complete(&mut rows, &deduped.seen);
    if summary.synthesized > 0 {
        warn!(
            "[COMPLETE] Source is missing {} input combinations; synthesized them",
            summary.synthesized
        );
    }

    let mut rows: Vec<Row> = rows.into_iter().map(fill_outputs).collect();
    sort_canonical(&mut rows);
    summary.rows_written = rows.len();

    info!(
        "[NORMALIZE] {} data lines, {} malformed, {} non-binary, {} duplicates, {} synthesized",
        summary.data_lines,
        summary.malformed_skipped,
        summary.non_binary_skipped,
        summary.duplicates_dropped,
        summary.synthesized
    );

    Ok(NormalizedTable { rows, summary })
}

/// Read `config.input_path`, normalize it and write `config.output_path`.
pub fn run(config: &AdderConfig) -> Result<NormalizeSummary> {
    info!("[NORMALIZE] Reading {}", config.input_path.display());
    let text = fs::read_to_string(&config.input_path)?;

    let tokenizer = Tokenizer::from_config(config);
    let NormalizedTable { rows, mut summary } =
        normalize_text(&config.input_path, &text, &tokenizer)?;

    write_table_file(&config.output_path, &rows)?;
    info!(
        "[NORMALIZE] Wrote {} rows to {}",
        rows.len(),
        config.output_path.display()
    );

    summary.output_path = Some(config.output_path.clone());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "idx\tt\t$OA0\t$OA1\t$OA2\t$OA3\t$OB0\t$OB1\t$OB2\t$OB3\t$OM\t$OS0\t$OS1\t$OS2\t$OS3\t$OCout";

    fn normalize(text: &str) -> Result<NormalizedTable> {
        normalize_text(Path::new("inline.tim"), text, &Tokenizer::default())
    }

    #[test]
    fn test_header_only_is_fully_synthesized() {
        let table = normalize(HEADER).unwrap();
        assert_eq!(table.rows.len(), 512);
        assert_eq!(table.summary.synthesized, 512);
        assert_eq!(table.summary.data_lines, 0);
        assert!(table.rows.iter().all(|r| !r.has_placeholder()));
    }

    #[test]
    fn test_summary_counts_each_stage() {
        let text = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            HEADER,
            "0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0",
            "1\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t1\t1\t1\t1\t1",
            "2\t0\t0\t0",
            "3\t0\t?\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0",
        );
        let table = normalize(&text).unwrap();
        assert_eq!(
            table.summary,
            NormalizeSummary {
                data_lines: 4,
                malformed_skipped: 1,
                non_binary_skipped: 1,
                duplicates_dropped: 1,
                synthesized: 511,
                rows_written: 512,
                output_path: None,
            }
        );
    }

    #[test]
    fn test_empty_text_is_fatal() {
        let err = normalize("").unwrap_err();
        assert!(matches!(err, TableError::EmptyInput { .. }));
    }

    #[test]
    fn test_header_without_fields_is_fatal() {
        let err = normalize("idx\tt\t$OA0\t$OA1").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { .. }));
    }

    #[test]
    fn test_run_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AdderConfig::default().with_overrides(
            Some(dir.path().join("absent.tim")),
            Some(dir.path().join("out.csv")),
        );
        assert!(matches!(run(&config), Err(TableError::Io(_))));
        assert!(!dir.path().join("out.csv").exists());
    }
}
