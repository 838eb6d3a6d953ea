//! Canonical truth table row.

use crate::key::InputKey;
use crate::schema::{FIELD_COUNT, INPUT_WIDTH, PLACEHOLDER};
use serde::{Deserialize, Serialize};

/// One row in canonical column order (see `CANONICAL_HEADER`).
/// Fields are kept as text so placeholders and unexpected source values
/// survive until the output pass decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: [String; FIELD_COUNT],
}

impl Row {
    pub fn new(fields: [String; FIELD_COUNT]) -> Self {
        Self { fields }
    }

    /// Build a row from exactly `FIELD_COUNT` values.
    pub fn from_vec(fields: Vec<String>) -> Option<Self> {
        fields.try_into().ok().map(Self::new)
    }

    /// Row whose inputs come from `key` and whose outputs are placeholders.
    pub fn placeholder(key: &InputKey) -> Self {
        let mut fields: [String; FIELD_COUNT] = std::array::from_fn(|_| PLACEHOLDER.to_string());
        for (field, bit) in fields.iter_mut().zip(key.bits()) {
            *field = bit.to_string();
        }
        Self { fields }
    }

    pub fn input_key(&self) -> InputKey {
        InputKey::from_fields(self.inputs())
    }

    pub fn inputs(&self) -> &[String] {
        &self.fields[..INPUT_WIDTH]
    }

    pub fn outputs(&self) -> &[String] {
        &self.fields[INPUT_WIDTH..]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Overwrite one field. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            *field = value.into();
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.fields.iter().any(|f| f == PLACEHOLDER)
    }
}
