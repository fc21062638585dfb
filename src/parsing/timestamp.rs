//! Date and time canonicalization.
//!
//! Captured timestamps come in three time encodings and two date encodings.
//! Everything is reduced to a [`NaiveDate`] and a 24-hour [`ChatTime`].
//!
//! Two-digit years are read as `20YY`. Exports from before 2000 don't exist
//! for this app, and chrono's `%y` would put `69`..`99` in the last century.

use chrono::NaiveDate;

use crate::error::{ChatlensError, TimestampField};
use crate::record::ChatTime;
use crate::registry::{DateShape, FormatSpec, TimeShape};

/// Parses an all-ASCII-digit component.
fn number(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Canonicalizes a date capture.
///
/// ```rust
/// use chatlens::parsing::timestamp::normalize_date;
/// use chatlens::registry::DateShape;
///
/// let date = normalize_date("15.03.23", DateShape::DotDayMonthShortYear).unwrap();
/// assert_eq!(date.to_string(), "2023-03-15");
/// ```
pub fn normalize_date(raw: &str, shape: DateShape) -> Result<NaiveDate, ChatlensError> {
    let malformed =
        || ChatlensError::malformed_timestamp(0, TimestampField::Date, raw, shape.describe());

    let mut parts = raw.trim().split(shape.separator());
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let day = number(day).ok_or_else(malformed)?;
    let month = number(month).ok_or_else(malformed)?;
    let year = match (shape, year.len()) {
        (DateShape::DotDayMonthShortYear, 2) => 2000 + number(year).ok_or_else(malformed)?,
        (DateShape::SlashDayMonthYear, 4) => number(year).ok_or_else(malformed)?,
        _ => return Err(malformed()),
    };

    let year = i32::try_from(year).map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Canonicalizes a time capture to 24-hour form.
///
/// 12-hour values map `12 AM` to hour 0 and add 12 to PM hours below 12.
/// The meridiem may be preceded by a regular space or U+202F.
///
/// ```rust
/// use chatlens::parsing::timestamp::normalize_time;
/// use chatlens::registry::TimeShape;
///
/// let time = normalize_time("8:17:43 PM", TimeShape::Seconds12).unwrap();
/// assert_eq!(time.to_string(), "20:17");
///
/// let time = normalize_time("12:05:00 AM", TimeShape::Seconds12).unwrap();
/// assert_eq!(time.to_string(), "00:05");
/// ```
pub fn normalize_time(raw: &str, shape: TimeShape) -> Result<ChatTime, ChatlensError> {
    let malformed =
        || ChatlensError::malformed_timestamp(0, TimestampField::Time, raw, shape.describe());
    let trimmed = raw.trim();

    let (clock, meridiem) = match shape {
        TimeShape::Seconds12 => {
            let split = trimmed
                .char_indices()
                .rev()
                .find(|(_, c)| *c == ' ' || *c == '\u{202f}')
                .ok_or_else(malformed)?;
            let (clock, rest) = trimmed.split_at(split.0);
            let meridiem = rest[split.1.len_utf8()..].to_ascii_uppercase();
            match meridiem.as_str() {
                "AM" => (clock, Some(false)),
                "PM" => (clock, Some(true)),
                _ => return Err(malformed()),
            }
        }
        TimeShape::Seconds24 | TimeShape::Minutes24 => (trimmed, None),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let wants_seconds = !matches!(shape, TimeShape::Minutes24);
    let expected_parts = if wants_seconds { 3 } else { 2 };
    if parts.len() != expected_parts || parts[1].len() != 2 {
        return Err(malformed());
    }

    let hour = number(parts[0]).ok_or_else(malformed)?;
    let minute = number(parts[1]).ok_or_else(malformed)?;
    let second = if wants_seconds {
        if parts[2].len() != 2 {
            return Err(malformed());
        }
        Some(number(parts[2]).ok_or_else(malformed)?)
    } else {
        None
    };

    let hour = match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hour) {
                return Err(malformed());
            }
            match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
        None => hour,
    };

    match second {
        Some(s) => ChatTime::with_seconds(hour, minute, s),
        None => ChatTime::new(hour, minute),
    }
    .ok_or_else(malformed)
}

/// Canonicalizes both halves of a timestamp for the given format.
///
/// Errors carry line `0`; callers attach the real line with
/// [`ChatlensError::at_line`].
pub fn normalize(
    raw_date: &str,
    raw_time: &str,
    spec: &FormatSpec,
) -> Result<(NaiveDate, ChatTime), ChatlensError> {
    let date = normalize_date(raw_date, spec.date_shape())?;
    let time = normalize_time(raw_time, spec.time_shape())?;
    Ok((date, time))
}

/// Formats a time in its canonical 24-hour `HH:MM` form.
pub fn format_hm(time: ChatTime) -> String {
    time.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_slash_four_digit_year() {
        let date = normalize_date("15/03/2023", DateShape::SlashDayMonthYear).unwrap();
        assert_eq!(date, ymd(2023, 3, 15));
    }

    #[test]
    fn test_date_dot_two_digit_year() {
        assert_eq!(
            normalize_date("01.12.99", DateShape::DotDayMonthShortYear).unwrap(),
            ymd(2099, 12, 1)
        );
        assert_eq!(
            normalize_date("29.02.24", DateShape::DotDayMonthShortYear).unwrap(),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn test_date_invalid_calendar_day() {
        let err = normalize_date("31.02.23", DateShape::DotDayMonthShortYear).unwrap_err();
        assert!(err.is_malformed_timestamp());
        assert!(err.to_string().contains("31.02.23"));
        assert!(err.to_string().contains("DD.MM.YY"));
    }

    #[test]
    fn test_date_wrong_shape() {
        assert!(normalize_date("15.03.2023", DateShape::DotDayMonthShortYear).is_err());
        assert!(normalize_date("15/03/23", DateShape::SlashDayMonthYear).is_err());
        assert!(normalize_date("15-03-2023", DateShape::SlashDayMonthYear).is_err());
        assert!(normalize_date("15/03/2023/1", DateShape::SlashDayMonthYear).is_err());
        assert!(normalize_date("+5/03/2023", DateShape::SlashDayMonthYear).is_err());
    }

    #[test]
    fn test_time_24h_seconds() {
        let time = normalize_time("20:22:06", TimeShape::Seconds24).unwrap();
        assert_eq!(time.hour(), 20);
        assert_eq!(time.minute(), 22);
        assert_eq!(time.second(), Some(6));
        assert_eq!(format_hm(time), "20:22");
    }

    #[test]
    fn test_time_24h_minutes() {
        let time = normalize_time("07:05", TimeShape::Minutes24).unwrap();
        assert_eq!(time, ChatTime::new(7, 5).unwrap());
        assert!(normalize_time("07:05:00", TimeShape::Minutes24).is_err());
    }

    #[test]
    fn test_time_12h_conversion() {
        let cases = [
            ("8:17:43 AM", 8),
            ("8:17:43 PM", 20),
            ("12:00:00 AM", 0),
            ("12:00:00 PM", 12),
            ("11:59:59 PM", 23),
            ("1:00:00 AM", 1),
        ];
        for (raw, hour) in cases {
            let time = normalize_time(raw, TimeShape::Seconds12).unwrap();
            assert_eq!(time.hour(), hour, "{raw}");
        }
    }

    #[test]
    fn test_time_12h_narrow_no_break_space() {
        let time = normalize_time("8:17:43\u{202f}PM", TimeShape::Seconds12).unwrap();
        assert_eq!(time.to_string(), "20:17");
    }

    #[test]
    fn test_time_out_of_range() {
        assert!(normalize_time("25:00:00", TimeShape::Seconds24).is_err());
        assert!(normalize_time("10:60", TimeShape::Minutes24).is_err());
        assert!(normalize_time("13:00:00 PM", TimeShape::Seconds12).is_err());
        assert!(normalize_time("0:10:00 AM", TimeShape::Seconds12).is_err());
        assert!(normalize_time("8:17:43", TimeShape::Seconds12).is_err());
        assert!(normalize_time("8:17:43 XM", TimeShape::Seconds12).is_err());
    }

    #[test]
    fn test_time_error_names_field() {
        let err = normalize_time("99:99", TimeShape::Minutes24).unwrap_err();
        assert!(matches!(
            err,
            ChatlensError::MalformedTimestamp {
                field: TimestampField::Time,
                line: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_form() {
        for (raw, shape) in [
            ("20:22:06", TimeShape::Seconds24),
            ("20:22", TimeShape::Minutes24),
            ("8:17:43 PM", TimeShape::Seconds12),
            ("12:01:00 AM", TimeShape::Seconds12),
        ] {
            let once = normalize_time(raw, shape).unwrap();
            let twice = normalize_time(&format_hm(once), TimeShape::Minutes24).unwrap();
            assert_eq!(twice, once.truncate_to_minute(), "{raw}");
        }
    }

    #[test]
    fn test_normalize_pair() {
        let (date, time) =
            normalize("15.03.23", "8:17:43 AM", &FormatSpec::BracketedDotTwelveHour).unwrap();
        assert_eq!(date, ymd(2023, 3, 15));
        assert_eq!(time.to_string(), "08:17");

        let err = normalize("15.03.23", "8:17", &FormatSpec::BracketedDotTwelveHour).unwrap_err();
        assert!(err.is_malformed_timestamp());
    }
}
