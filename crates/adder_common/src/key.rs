//! Input keys: the nine input bits of a row as a binary string.

use crate::schema::{INPUT_SPACE, INPUT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concatenation of A0..A3, B0..B3, M.
///
/// Read as a binary number the first character is the most significant bit,
/// so `A0` weighs 256 in the key even though it is the LSB of operand A.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputKey(String);

impl InputKey {
    /// Build a key from the input field values, in key order.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        Self(fields.iter().map(|f| f.as_ref()).collect())
    }

    /// Zero-padded 9-bit binary rendering of `value`.
    pub fn from_value(value: u16) -> Self {
        Self(format!("{:0width$b}", value, width = INPUT_WIDTH))
    }

    /// Every key of the input space, ascending.
    pub fn all() -> impl Iterator<Item = InputKey> {
        (0..INPUT_SPACE as u16).map(InputKey::from_value)
    }

    /// Numeric value of the key, or None if it is not a 9-bit binary string.
    pub fn value(&self) -> Option<u16> {
        if !self.is_binary() {
            return None;
        }
        u16::from_str_radix(&self.0, 2).ok()
    }

    /// True when the key has nine characters, each `0` or `1`.
    pub fn is_binary(&self) -> bool {
        self.0.len() == INPUT_WIDTH && self.0.chars().all(|c| c == '0' || c == '1')
    }

    /// Key characters in key order.
    pub fn bits(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
