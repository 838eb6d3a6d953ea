//! Tokenizing source dump lines.
//!
//! A line is trimmed, split on tabs and stripped of empty tokens. Each token
//! loses every occurrence of the marker and its surrounding whitespace, and
//! the leading metadata columns are dropped.

use adder_common::{AdderConfig, DEFAULT_MARKER, DEFAULT_METADATA_COLUMNS};

pub const DELIMITER: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    marker: String,
    metadata_columns: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_METADATA_COLUMNS)
    }
}

impl Tokenizer {
    pub fn new(marker: &str, metadata_columns: usize) -> Self {
        Self {
            marker: marker.to_string(),
            metadata_columns,
        }
    }

    pub fn from_config(config: &AdderConfig) -> Self {
        Self::new(&config.marker, config.metadata_columns)
    }

    /// Cleaned data tokens of a line, metadata columns removed.
    pub fn fields(&self, line: &str) -> Vec<String> {
        split_tokens(line)
            .into_iter()
            .map(|t| self.clean(t))
            .skip(self.metadata_columns)
            .collect()
    }

    pub fn clean(&self, token: &str) -> String {
        if self.marker.is_empty() {
            return token.trim().to_string();
        }
        token.replace(&self.marker, "").trim().to_string()
    }
}

/// Non-empty tab-separated tokens of a trimmed line.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.trim()
        .split(DELIMITER)
        .filter(|t| !t.is_empty())
        .collect()
}
