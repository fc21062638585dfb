//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for deriving a filtered corpus.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Records from one participant |
//!
//! # Example
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::{ChatRecord, ChatTime, MessageCorpus};
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let time = ChatTime::new(12, 0).unwrap();
//! let corpus: MessageCorpus = vec![
//!     ChatRecord::new(1, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), time, "Alice", "Old"),
//!     ChatRecord::new(2, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), time, "Alice", "New"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(&corpus, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.records()[0].message(), "New");
//! // The input corpus is untouched
//! assert_eq!(corpus.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both date bounds are inclusive whole days
//! - Author matching uses [`ChatRecord::display_author`] and ignores case
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::error::ChatlensError;
use crate::record::{ChatRecord, MessageCorpus};

/// Configuration for filtering records by date and author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only records from this author (case-insensitive).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// ```
    /// use chatlens::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "~ ALICE"
    /// let config = FilterConfig::new().with_author("Alice");
    /// ```
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the author filter is active.
    pub fn has_author_filter(&self) -> bool {
        self.author.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        if let Some(ref author) = self.author {
            if record.display_author().to_lowercase() != author.trim().to_lowercase() {
                return false;
            }
        }

        let date = record.date();
        if self.after.is_some_and(|after| date < after) {
            return false;
        }
        if self.before.is_some_and(|before| date > before) {
            return false;
        }

        true
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Builds a new corpus holding only records that match all active filters.
///
/// Records keep their order and line numbers.
pub fn apply_filters(corpus: &MessageCorpus, config: &FilterConfig) -> MessageCorpus {
    if !config.is_active() {
        return corpus.clone();
    }

    corpus
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect()
}
