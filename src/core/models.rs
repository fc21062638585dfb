//! Export row model and output configuration.

use serde::Serialize;

use crate::record::ChatRecord;

/// Configuration for corpus export.
/// Controls which optional fields are written next to date, time, author and message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include the source line number
    pub include_line: bool,
    /// Include an ISO timestamp: `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DDTHH:MM`
    /// when the source line had no seconds
    pub include_timestamp: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_numbers(mut self) -> Self {
        self.include_line = true;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamp = true;
        self
    }
}

/// One exported record.
/// Only includes optional fields enabled in [`OutputConfig`].
#[derive(Debug, Serialize)]
pub(crate) struct ExportRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub author: &'a str,
    pub message: &'a str,
}

impl<'a> ExportRow<'a> {
    pub fn from_record(record: &'a ChatRecord, config: &OutputConfig) -> Self {
        Self {
            line: config.include_line.then(|| record.line()),
            date: record.date().format("%Y-%m-%d").to_string(),
            time: record.time().to_string(),
            timestamp: config.include_timestamp.then(|| timestamp(record)),
            author: record.author(),
            message: record.message(),
        }
    }
}

/// ISO timestamp at the precision the source line had.
fn timestamp(record: &ChatRecord) -> String {
    let pattern = if record.time().second().is_some() {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M"
    };
    record.datetime().format(pattern).to_string()
}
