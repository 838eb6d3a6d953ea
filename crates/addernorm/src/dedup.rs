//! First-seen-wins deduplication by input key.

use adder_common::{InputKey, Row};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Deduplicated {
    /// Surviving rows, in order of first appearance
    pub rows: Vec<Row>,
    /// Input keys of the surviving rows
    pub seen: HashSet<InputKey>,
    /// Rows dropped because their key was already present
    pub duplicates: usize,
}

/// Keep the first row for each input key; later rows with the same key are
/// dropped no matter what their outputs say.
pub fn dedup_first_seen<I>(rows: I) -> Deduplicated
where
    I: IntoIterator<Item = Row>,
{
    let mut out = Deduplicated::default();

    for row in rows {
        let key = row.input_key();
        if out.seen.contains(&key) {
            debug!("[DEDUP] Dropping duplicate row for key {}", key);
            out.duplicates += 1;
            continue;
        }
        out.seen.insert(key);
        out.rows.push(row);
    }

    out
}
