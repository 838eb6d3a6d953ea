//! Reference adder for verification.
//!
//! Written independently of the normalizer's model on purpose; do not
//! replace with a call into `addernorm`.

/// Weighted sum of LSB-first bits.
pub fn operand_value(bits: &[u8]) -> u32 {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (weight, &bit)| acc + (u32::from(bit) << weight))
}

/// Expected `[S0, S1, S2, S3, Cout]` for A + B + carry-in.
pub fn expected_outputs(a: &[u8; 4], b: &[u8; 4], carry_in: u8) -> [u8; 5] {
    let total = operand_value(a) + operand_value(b) + u32::from(carry_in);
    let bit = |i: u32| ((total >> i) & 1) as u8;
    [bit(0), bit(1), bit(2), bit(3), bit(4)]
}
