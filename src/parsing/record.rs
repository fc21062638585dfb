//! Structural line matching.

use regex::Regex;

use crate::error::ChatlensError;
use crate::registry::FormatSpec;

/// The four captures of a matched line, still in source notation.
///
/// Borrows from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Date as written, e.g. `15.03.23`
    pub date: &'a str,
    /// Time as written, e.g. `8:17:43 AM`
    pub time: &'a str,
    /// Author as written
    pub author: &'a str,
    /// Message body as written
    pub message: &'a str,
}

impl RawRecord<'_> {
    /// Rebuilds the source line from the captures and the format delimiters.
    pub fn reassemble(&self, spec: FormatSpec) -> String {
        let [open, date_time, time_author, author_message] = spec.delimiters();
        format!(
            "{open}{}{date_time}{}{time_author}{}{author_message}{}",
            self.date, self.time, self.author, self.message
        )
    }
}

/// Applies one [`FormatSpec`] pattern to candidate lines.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::RecordParser;
/// use chatlens::registry::FormatSpec;
///
/// # fn main() -> chatlens::Result<()> {
/// let parser = RecordParser::new(FormatSpec::DashedDotMinutes)?;
/// let raw = parser.parse_line("15.03.23, 20:22 - Anna: Hallo").unwrap();
/// assert_eq!(raw.author, "Anna");
/// assert_eq!(raw.message, "Hallo");
///
/// // Continuation lines of multi-line messages don't match
/// assert!(parser.parse_line("second line of the message").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordParser {
    spec: FormatSpec,
    regex: Regex,
}

impl RecordParser {
    /// Compiles the pattern of `spec`.
    pub fn new(spec: FormatSpec) -> Result<Self, ChatlensError> {
        let regex = Regex::new(spec.pattern()).map_err(|e| {
            ChatlensError::config(format!("invalid pattern for {spec}: {e}"), None)
        })?;
        Ok(Self { spec, regex })
    }

    /// Active format.
    pub fn spec(&self) -> FormatSpec {
        self.spec
    }

    /// Matches the full line; `None` when it doesn't have the format's shape.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<RawRecord<'a>> {
        let caps = self.regex.captures(line)?;
        Some(RawRecord {
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            author: caps.get(3)?.as_str(),
            message: caps.get(4)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(spec: FormatSpec) -> RecordParser {
        RecordParser::new(spec).unwrap()
    }

    #[test]
    fn test_parse_bracketed_slash() {
        let raw = parser(FormatSpec::BracketedSlashSeconds)
            .parse_line("[15/03/2023 20:22:06] Alice: Hello there")
            .unwrap();
        assert_eq!(raw.date, "15/03/2023");
        assert_eq!(raw.time, "20:22:06");
        assert_eq!(raw.author, "Alice");
        assert_eq!(raw.message, "Hello there");
    }

    #[test]
    fn test_parse_twelve_hour() {
        let raw = parser(FormatSpec::BracketedDotTwelveHour)
            .parse_line("[15.03.23, 8:17:43 AM] Bob: Good morning")
            .unwrap();
        assert_eq!(raw.date, "15.03.23");
        assert_eq!(raw.time, "8:17:43 AM");
        assert_eq!(raw.author, "Bob");
        assert_eq!(raw.message, "Good morning");
    }

    #[test]
    fn test_parse_dashed() {
        let raw = parser(FormatSpec::DashedDotMinutes)
            .parse_line("15.03.23, 20:22 - Anna Schmidt: Bis später: 8 Uhr")
            .unwrap();
        assert_eq!(raw.author, "Anna Schmidt");
        // Only the first ": " separates author from message
        assert_eq!(raw.message, "Bis später: 8 Uhr");
    }

    #[test]
    fn test_empty_message_is_kept() {
        let raw = parser(FormatSpec::DashedDotMinutes)
            .parse_line("15.03.23, 20:22 - Anna: ")
            .unwrap();
        assert_eq!(raw.message, "");
    }

    #[test]
    fn test_wrong_format_does_not_match() {
        let p = parser(FormatSpec::BracketedSlashSeconds);
        assert!(p.parse_line("[15.03.23, 8:17:43 AM] Bob: Good morning").is_none());
        assert!(p.parse_line("15.03.23, 20:22 - Anna: Hallo").is_none());
        assert!(p.parse_line("").is_none());
    }

    #[test]
    fn test_full_line_match_only() {
        let p = parser(FormatSpec::DashedDotMinutes);
        assert!(p.parse_line("xx 15.03.23, 20:22 - Anna: Hallo").is_none());
    }

    #[test]
    fn test_reassemble_reproduces_line() {
        for spec in FormatSpec::all() {
            let line = spec.example();
            let raw = parser(*spec).parse_line(line).unwrap();
            assert_eq!(raw.reassemble(*spec), line);
        }
    }
}
