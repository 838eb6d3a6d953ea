//! Canonical schema of the 4-bit adder truth table.
//!
//! Operand bits are LSB first: `A0` is the 1s bit of A, `A3` the 8s bit.
//! `M` is the carry-in.

/// Canonical column order of every row and of the output CSV header.
pub const CANONICAL_HEADER: [&str; FIELD_COUNT] = [
    "A0", "A1", "A2", "A3", "B0", "B1", "B2", "B3", "M", "S0", "S1", "S2", "S3", "Cout",
];

/// Fields that make up the input key, in key order.
pub const INPUT_FIELDS: [&str; INPUT_WIDTH] = ["A0", "A1", "A2", "A3", "B0", "B1", "B2", "B3", "M"];

/// Output fields in report order (sum bits LSB first, then carry-out).
pub const OUTPUT_FIELDS: [&str; OUTPUT_WIDTH] = ["S0", "S1", "S2", "S3", "Cout"];

pub const FIELD_COUNT: usize = 14;
pub const INPUT_WIDTH: usize = 9;
pub const OUTPUT_WIDTH: usize = 5;

/// Number of distinct input keys (2^9).
pub const INPUT_SPACE: usize = 1 << INPUT_WIDTH;

/// Marks a field that has not been computed yet.
pub const PLACEHOLDER: &str = "?";

/// Literal prefix the source dump puts on its labels and values.
pub const DEFAULT_MARKER: &str = "$O";

/// Leading source columns that carry positional metadata, not fields.
pub const DEFAULT_METADATA_COLUMNS: usize = 2;

/// Canonical positions of the operand, carry-in and output fields.
pub mod idx {
    pub const A: [usize; 4] = [0, 1, 2, 3];
    pub const B: [usize; 4] = [4, 5, 6, 7];
    pub const M: usize = 8;
    pub const S: [usize; 4] = [9, 10, 11, 12];
    pub const COUT: usize = 13;
}

/// Position of a canonical field name, if it is one.
pub fn field_index(name: &str) -> Option<usize> {
    CANONICAL_HEADER.iter().position(|h| *h == name)
}

/// True for the two bit literals a finished table may contain.
pub fn is_bit(value: &str) -> bool {
    value == "0" || value == "1"
}
