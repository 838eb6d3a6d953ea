//! 4-bit adder model used to fill outputs.
//!
//! The verifier has its own implementation; keep the two separate so the
//! verifier never trusts this one.

use adder_common::{idx, Row};
use tracing::warn;

/// Sum bits (LSB first) and carry-out of one addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdderOutputs {
    pub sum: [bool; 4],
    pub carry_out: bool,
}

/// Unsigned value of four LSB-first bits.
fn nibble(bits: [bool; 4]) -> u8 {
    bits.iter()
        .enumerate()
        .map(|(i, &bit)| u8::from(bit) << i)
        .sum()
}

/// Add two 4-bit operands and a carry-in. The total never exceeds 31.
pub fn add(a: [bool; 4], b: [bool; 4], carry_in: bool) -> AdderOutputs {
    let total = nibble(a) + nibble(b) + u8::from(carry_in);
    AdderOutputs {
        sum: std::array::from_fn(|i| (total >> i) & 1 == 1),
        carry_out: (total >> 4) & 1 == 1,
    }
}

fn parse_bit(value: &str) -> Option<bool> {
    match value {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn read_nibble(row: &Row, positions: [usize; 4]) -> Option<[bool; 4]> {
    let mut bits = [false; 4];
    for (bit, pos) in bits.iter_mut().zip(positions) {
        *bit = parse_bit(row.get(pos)?)?;
    }
    Some(bits)
}

fn bit_str(bit: bool) -> &'static str {
    if bit {
        "1"
    } else {
        "0"
    }
}

fn read_inputs(row: &Row) -> Option<([bool; 4], [bool; 4], bool)> {
    let a = read_nibble(row, idx::A)?;
    let b = read_nibble(row, idx::B)?;
    let m = parse_bit(row.get(idx::M)?)?;
    Some((a, b, m))
}

/// Overwrite S0..S3 and Cout with values computed from the row's inputs.
/// A row whose inputs are not all bits is returned unchanged.
pub fn fill_outputs(mut row: Row) -> Row {
    let Some((a, b, carry_in)) = read_inputs(&row) else {
        warn!(
            "[FILL] Leaving row {} unchanged: inputs are not all bits",
            row.input_key()
        );
        return row;
    };

    let out = add(a, b, carry_in);
    for (pos, bit) in idx::S.into_iter().zip(out.sum) {
        row.set(pos, bit_str(bit));
    }
    row.set(idx::COUT, bit_str(out.carry_out));
    row
}
