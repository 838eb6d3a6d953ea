//! Canonical ordering of the finished table.

use adder_common::Row;

/// Sort key of a row: its input key read as a binary number. Rows without
/// a numeric key sort after every valid row.
fn numeric_key(row: &Row) -> u32 {
    row.input_key()
        .value()
        .map_or(u32::MAX, u32::from)
}

/// Order rows ascending by numeric input key.
pub fn sort_canonical(rows: &mut [Row]) {
    rows.sort_by_cached_key(numeric_key);
}

/// True when every adjacent pair is strictly ascending.
pub fn is_canonical(rows: &[Row]) -> bool {
    rows.windows(2)
        .all(|pair| numeric_key(&pair[0]) < numeric_key(&pair[1]))
}
