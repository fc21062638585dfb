//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, following the pattern used by crates like `csv` and
//! `serde_json`.
//!
//! # Error Handling Philosophy
//!
//! - **Recoverable noise** (system lines, lines that don't match the active
//!   format) never becomes an error; the pipeline drops and counts it
//! - **Configuration mistakes** surface as [`ChatlensError::UnsupportedFormat`]
//!   or as [`ChatlensError::MalformedTimestamp`] carrying the offending line
//! - **I/O and output failures** keep their source error for debugging

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatRecord;
///
/// fn my_function() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// Which half of a timestamp failed to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    /// The date capture (e.g. `15.03.23`)
    Date,
    /// The time capture (e.g. `8:17:43 AM`)
    Time,
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampField::Date => write!(f, "date"),
            TimestampField::Time => write!(f, "time"),
        }
    }
}

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The output directory can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No line format is registered for the requested locale/platform pair.
    ///
    /// Fatal at startup: nothing is parsed.
    #[error("Unsupported format: system language '{system_language}' on '{operating_system}'")]
    UnsupportedFormat {
        /// Requested system language (as given)
        system_language: String,
        /// Requested operating system (as given)
        operating_system: String,
    },

    /// A line matched the active format but its date or time could not be
    /// canonicalized.
    ///
    /// This almost always means the wrong format was configured.
    #[error("Malformed {field} '{value}' on line {line}: expected {expected}")]
    MalformedTimestamp {
        /// 1-based line number in the input (0 when parsed out of context)
        line: usize,
        /// Which field failed
        field: TimestampField,
        /// The captured text
        value: String,
        /// Shape that was expected
        expected: &'static str,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown or disabled export format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// Which format kind ("output")
        format: &'static str,
        /// What went wrong
        message: String,
    },

    /// Configuration file could not be read or deserialized.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Config {
        /// Description of what's wrong
        message: String,
        /// The config file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering failed.
    #[error("Failed to render {chart}: {message}")]
    Render {
        /// Chart being drawn (e.g. "timeline")
        chart: &'static str,
        /// Backend error description
        message: String,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for ChatlensError {
    fn from(err: toml::de::Error) -> Self {
        ChatlensError::Config {
            message: err.to_string(),
            path: None,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unsupported format error.
    pub fn unsupported_format(
        system_language: impl Into<String>,
        operating_system: impl Into<String>,
    ) -> Self {
        ChatlensError::UnsupportedFormat {
            system_language: system_language.into(),
            operating_system: operating_system.into(),
        }
    }

    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(
        line: usize,
        field: TimestampField,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ChatlensError::MalformedTimestamp {
            line,
            field,
            value: value.into(),
            expected,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlensError::Config {
            message: message.into(),
            path,
        }
    }

    /// Creates a rendering error.
    pub fn render(chart: &'static str, message: impl ToString) -> Self {
        ChatlensError::Render {
            chart,
            message: message.to_string(),
        }
    }

    /// Returns a copy of a timestamp error attributed to `line`.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ChatlensError::MalformedTimestamp {
                field,
                value,
                expected,
                ..
            } => ChatlensError::MalformedTimestamp {
                line,
                field,
                value,
                expected,
            },
            other => other,
        }
    }

    /// Returns the offending line number for timestamp errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ChatlensError::MalformedTimestamp { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an unsupported format error.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ChatlensError::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is a malformed timestamp error.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatlensError::MalformedTimestamp { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is an export format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatlensError::Config { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ChatlensError::unsupported_format("fra", "android");
        let display = err.to_string();
        assert!(display.contains("fra"));
        assert!(display.contains("android"));
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_malformed_timestamp_display() {
        let err = ChatlensError::malformed_timestamp(
            42,
            TimestampField::Time,
            "25:99",
            "HH:MM (24-hour)",
        );
        let display = err.to_string();
        assert!(display.contains("line 42"));
        assert!(display.contains("25:99"));
        assert!(display.contains("time"));
        assert_eq!(err.line(), Some(42));
    }

    #[test]
    fn test_at_line_rewrites_timestamp_errors_only() {
        let err = ChatlensError::malformed_timestamp(0, TimestampField::Date, "x", "DD.MM.YY")
            .at_line(7);
        assert_eq!(err.line(), Some(7));

        let other = ChatlensError::invalid_date("bad").at_line(7);
        assert!(other.is_invalid_date());
        assert_eq!(other.line(), None);
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_config_error_with_path() {
        let err = ChatlensError::config("missing field", Some(PathBuf::from("/etc/chat.toml")));
        let display = err.to_string();
        assert!(display.contains("missing field"));
        assert!(display.contains("/etc/chat.toml"));

        let without = ChatlensError::config("missing field", None);
        assert!(!without.to_string().contains("file:"));
    }

    #[test]
    fn test_render_error_display() {
        let err = ChatlensError::render("timeline", "backend failed");
        let display = err.to_string();
        assert!(display.contains("timeline"));
        assert!(display.contains("backend failed"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: ChatlensError = toml_err.into();
        assert!(err.is_config());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_malformed_timestamp());
        assert!(!io_err.is_unsupported_format());
        assert!(!io_err.is_invalid_date());
        assert!(!io_err.is_config());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatlensError::invalid_date("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
