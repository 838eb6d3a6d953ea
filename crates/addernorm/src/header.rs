//! Source header to canonical schema mapping.

use crate::tokens::Tokenizer;
use adder_common::{Result, Row, TableError, CANONICAL_HEADER, FIELD_COUNT};

/// Index permutation from source columns to canonical fields.
///
/// `index_map[i]` is the source position of canonical field `i`. Built once
/// from the header and applied to every data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    source_width: usize,
    index_map: [usize; FIELD_COUNT],
}

impl HeaderMap {
    /// Map cleaned header labels (metadata columns already removed).
    /// The first matching label wins when a name repeats.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut index_map = [0usize; FIELD_COUNT];
        for (slot, name) in index_map.iter_mut().zip(CANONICAL_HEADER) {
            *slot = labels
                .iter()
                .position(|label| label.as_ref() == name)
                .ok_or_else(|| TableError::MissingColumn {
                    name: name.to_string(),
                })?;
        }

        Ok(Self {
            source_width: labels.len(),
            index_map,
        })
    }

    /// Tokenize a raw header line and map it.
    pub fn parse(line: &str, tokenizer: &Tokenizer) -> Result<Self> {
        Self::from_labels(&tokenizer.fields(line))
    }

    /// Column count every data line must have after tokenizing.
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    pub fn index_map(&self) -> &[usize; FIELD_COUNT] {
        &self.index_map
    }

    /// Reorder source tokens into a canonical row. None when the token
    /// count does not match the header.
    pub fn apply<S: AsRef<str>>(&self, tokens: &[S]) -> Option<Row> {
        if tokens.len() != self.source_width {
            return None;
        }
        let fields = self.index_map.map(|i| tokens[i].as_ref().to_string());
        Some(Row::new(fields))
    }
}
