use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::RawResultRow;

/// Read result rows from a CSV file with a header row.
///
/// Expected columns: `tournament, year, place, entry, school, elim_points`
/// (the last two of `place`/`elim_points` may be absent entirely).
/// Rows come back in file order. Field-level defects - blank names, an
/// unparsable place - are not errors here; the expander absorbs them.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the CSV itself is
/// malformed (bad quoting, wrong field count).
pub fn read_rows(path: &Path) -> Result<Vec<RawResultRow>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open results file at {}", path.display()))?;
    parse_rows(file).with_context(|| format!("Malformed CSV in {}", path.display()))
}

fn parse_rows<R: Read>(input: R) -> Result<Vec<RawResultRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawResultRow = result?;
        rows.push(row);
    }
    Ok(rows)
}
