//! JSON Lines (JSONL) output writer.
//!
//! One record per line, handy for piping into `jq` or line-oriented tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::{ExportRow, OutputConfig};
use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"date":"2023-03-15","time":"20:22","author":"Alice","message":"Hello"}
/// {"date":"2023-03-15","time":"20:23","author":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[ChatRecord], config: &OutputConfig) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    records: &[ChatRecord],
    writer: &mut W,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    for record in records {
        let line = serde_json::to_string(&ExportRow::from_record(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
