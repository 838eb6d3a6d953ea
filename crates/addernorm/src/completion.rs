//! Completion of the 9-bit input space.

use adder_common::{InputKey, Row};
use std::collections::HashSet;

/// Keys of the full input space absent from `seen`, ascending.
pub fn missing_keys(seen: &HashSet<InputKey>) -> Vec<InputKey> {
    InputKey::all().filter(|key| !seen.contains(key)).collect()
}

/// Append a placeholder row for every missing key. Returns how many rows
/// were synthesized.
pub fn complete(rows: &mut Vec<Row>, seen: &HashSet<InputKey>) -> usize {
    let missing = missing_keys(seen);
    let count = missing.len();
    rows.extend(missing.iter().map(Row::placeholder));
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_common::{INPUT_SPACE, PLACEHOLDER};

    #[test]
    fn test_nothing_seen_means_everything_missing() {
        let mut rows = Vec::new();
        let added = complete(&mut rows, &HashSet::new());
        assert_eq!(added, INPUT_SPACE);
        assert_eq!(rows.len(), INPUT_SPACE);
        assert!(rows.iter().all(|r| r.outputs().iter().all(|f| f == PLACEHOLDER)));
    }

    #[test]
    fn test_seen_keys_are_not_synthesized() {
        let seen: HashSet<InputKey> = [0, 3, 511].into_iter().map(InputKey::from_value).collect();
        let missing = missing_keys(&seen);
        assert_eq!(missing.len(), INPUT_SPACE - 3);
        assert!(!missing.contains(&InputKey::from_value(3)));
        assert_eq!(missing.first(), Some(&InputKey::from_value(1)));
    }

    #[test]
    fn test_completed_keys_are_distinct_and_cover_space() {
        let seen: HashSet<InputKey> = (0..100).map(InputKey::from_value).collect();
        let mut rows: Vec<Row> = seen.iter().map(Row::placeholder).collect();
        complete(&mut rows, &seen);

        let keys: HashSet<InputKey> = rows.iter().map(Row::input_key).collect();
        assert_eq!(rows.len(), INPUT_SPACE);
        assert_eq!(keys.len(), INPUT_SPACE);
    }
}
