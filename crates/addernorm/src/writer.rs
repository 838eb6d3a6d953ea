//! Canonical CSV output.

use adder_common::{Result, Row, CANONICAL_HEADER};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the canonical header followed by one record per row.
pub fn write_table<W: Write>(out: W, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CANONICAL_HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table to it.
pub fn write_table_file(path: &Path, rows: &[Row]) -> Result<()> {
    let file = File::create(path)?;
    write_table(file, rows)
}
