//! Parse statistics.

use serde::Serialize;

/// Line counts of one parse run, by what happened to each line.
///
/// Every input line lands in exactly one bucket, so
/// `blank + system + unmatched + malformed + records == total_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines read
    pub total_lines: usize,
    /// Empty or whitespace-only lines
    pub blank: usize,
    /// Lines carrying a system marker
    pub system: usize,
    /// Lines not matching the active format (headers, continuations)
    pub unmatched: usize,
    /// Matched lines whose timestamp was skipped as malformed
    pub malformed: usize,
    /// Records produced
    pub records: usize,
}

impl ParseStats {
    /// Lines that were not blank.
    pub fn content_lines(&self) -> usize {
        self.total_lines - self.blank
    }

    /// Share of non-blank lines that became records, as a percentage.
    pub fn match_ratio(&self) -> f64 {
        let content = self.content_lines();
        if content == 0 {
            return 0.0;
        }
        (self.records as f64 / content as f64) * 100.0
    }

    /// Lines dropped for any reason except blankness.
    pub fn dropped(&self) -> usize {
        self.system + self.unmatched + self.malformed
    }
}
