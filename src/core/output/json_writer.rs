//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{ExportRow, OutputConfig};
use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"date": "2023-03-15", "time": "20:22", "author": "Alice", "message": "Hello"}
/// ]
/// ```
pub fn write_json(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(records: &[ChatRecord], config: &OutputConfig) -> Result<String, ChatlensError> {
    let rows: Vec<ExportRow<'_>> = records
        .iter()
        .map(|record| ExportRow::from_record(record, config))
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
