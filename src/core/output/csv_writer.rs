//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{ExportRow, OutputConfig};
use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Line`?, `Date`, `Time`, `Timestamp`?, `Author`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    write_to(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[ChatRecord], config: &OutputConfig) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_to<W: Write>(
    records: &[ChatRecord],
    sink: W,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_record(&ExportRow::from_record(record, config)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(6);
    if config.include_line {
        header.push("Line");
    }
    header.extend(["Date", "Time"]);
    if config.include_timestamp {
        header.push("Timestamp");
    }
    header.extend(["Author", "Message"]);
    header
}

fn build_record(row: &ExportRow<'_>) -> Vec<String> {
    let mut fields = Vec::with_capacity(6);
    if let Some(line) = row.line {
        fields.push(line.to_string());
    }
    fields.push(row.date.clone());
    fields.push(row.time.clone());
    if let Some(ref ts) = row.timestamp {
        fields.push(ts.clone());
    }
    fields.push(row.author.to_string());
    fields.push(row.message.to_string());
    fields
}
