//! Normalized chat records.
//!
//! This module provides [`ChatRecord`], the canonical unit every parsed line
//! becomes, [`ChatTime`], its 24-hour time of day, and [`MessageCorpus`], the
//! ordered, read-only collection of records for one run.
//!
//! # Example
//!
//! ```
//! use chatlens::{ChatRecord, ChatTime};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
//! let time = ChatTime::with_seconds(20, 22, 6).unwrap();
//! let record = ChatRecord::new(1, date, time, "Alice", "Hello there");
//!
//! assert_eq!(record.date().to_string(), "2023-03-15");
//! assert_eq!(record.time().to_string(), "20:22");
//! assert_eq!(record.hour(), 20);
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Time of day in 24-hour form.
///
/// Displays as `HH:MM`. Seconds are kept when the export had them so that
/// records within one minute still order correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawChatTime")]
pub struct ChatTime {
    hour: u32,
    minute: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    second: Option<u32>,
}

/// Unchecked serde form of [`ChatTime`].
#[derive(Deserialize)]
struct RawChatTime {
    hour: u32,
    minute: u32,
    #[serde(default)]
    second: Option<u32>,
}

impl TryFrom<RawChatTime> for ChatTime {
    type Error = String;

    fn try_from(raw: RawChatTime) -> Result<Self, Self::Error> {
        let time = match raw.second {
            Some(second) => ChatTime::with_seconds(raw.hour, raw.minute, second),
            None => ChatTime::new(raw.hour, raw.minute),
        };
        time.ok_or_else(|| {
            format!(
                "time out of range: hour {}, minute {}, second {}",
                raw.hour,
                raw.minute,
                raw.second.unwrap_or(0)
            )
        })
    }
}

impl ChatTime {
    /// Minute-precision time. Returns `None` when out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self {
            hour,
            minute,
            second: None,
        })
    }

    /// Second-precision time. Returns `None` when out of range.
    pub fn with_seconds(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self {
            hour,
            minute,
            second: Some(second),
        })
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds, when the source had them.
    pub fn second(&self) -> Option<u32> {
        self.second
    }

    /// Drops the seconds, keeping the canonical `HH:MM` value.
    #[must_use]
    pub fn truncate_to_minute(&self) -> Self {
        Self {
            second: None,
            ..*self
        }
    }

    /// Full-precision time as [`NaiveTime`] (seconds default to zero).
    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second.unwrap_or(0))
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ChatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A normalized chat message.
///
/// Built once by the parser and never mutated afterwards; every field is
/// reachable only through accessors.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `line` | `usize` | 1-based line number in the export |
/// | `date` | `NaiveDate` | Calendar date |
/// | `time` | [`ChatTime`] | 24-hour time of day |
/// | `author` | `String` | Author as captured |
/// | `message` | `String` | Message body as captured |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    line: usize,
    date: NaiveDate,
    time: ChatTime,
    author: String,
    message: String,
}

impl ChatRecord {
    /// Creates a record.
    pub fn new(
        line: usize,
        date: NaiveDate,
        time: ChatTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            date,
            time,
            author: author.into(),
            message: message.into(),
        }
    }

    /// Line number the record came from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Time of day.
    pub fn time(&self) -> ChatTime {
        self.time
    }

    /// Hour of day, for hourly buckets.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Day of week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Date and time combined at full precision.
    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.to_naive())
    }

    /// Author exactly as captured.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Message body exactly as captured.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Author with invisible formatting removed, for grouping.
    ///
    /// Strips byte-order marks, direction marks and isolates, and the `~`
    /// WhatsApp prefixes to names that aren't saved contacts.
    ///
    /// ```
    /// use chatlens::{ChatRecord, ChatTime};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let time = ChatTime::new(9, 0).unwrap();
    /// let record = ChatRecord::new(1, date, time, "~\u{202f}Bob\u{200e}", "hi");
    /// assert_eq!(record.display_author(), "Bob");
    /// ```
    pub fn display_author(&self) -> String {
        clean_author(&self.author)
    }
}

/// Removes invisible characters and the non-contact `~` prefix from a name.
pub fn clean_author(name: &str) -> String {
    let visible: String = name
        .chars()
        .filter(|c| {
            !c.is_control()
                && !matches!(
                    *c,
                    '\u{feff}'
                        | '\u{200e}'
                        | '\u{200f}'
                        | '\u{202a}'
                        | '\u{202b}'
                        | '\u{202c}'
                        | '\u{202d}'
                        | '\u{202e}'
                        | '\u{2060}'
                        | '\u{2066}'
                        | '\u{2067}'
                        | '\u{2068}'
                        | '\u{2069}'
                )
        })
        .collect();

    let trimmed = visible.trim_matches(|c: char| c.is_whitespace() || c == '\u{202f}');
    trimmed
        .strip_prefix('~')
        .map(|rest| rest.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{202f}'))
        .unwrap_or(trimmed)
        .to_string()
}

/// The ordered records of one export.
///
/// Records keep their file order. The corpus hands out shared borrows only;
/// derived views such as filtering build a new corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCorpus {
    records: Vec<ChatRecord>,
}

impl MessageCorpus {
    /// Wraps records that are already in file order.
    pub fn new(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    /// All records, in file order.
    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    /// Iterates the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no line produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last date present, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(ChatRecord::date).min()?;
        let last = self.records.iter().map(ChatRecord::date).max()?;
        Some((first, last))
    }

    /// Consumes the corpus, returning its records.
    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a MessageCorpus {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ChatRecord> for MessageCorpus {
    fn from_iter<I: IntoIterator<Item = ChatRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
