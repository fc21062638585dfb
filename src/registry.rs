//! Line format registry.
//!
//! WhatsApp writes the same logical line differently depending on the phone's
//! UI language and platform. Each known encoding is a [`FormatSpec`] variant
//! with its own anchored pattern; [`FormatRegistry`] maps a
//! (system language, operating system) pair to exactly one of them.
//!
//! Supported formats:
//! - `[15/03/2023 20:22:06] Alice: Hello` (German iOS)
//! - `[15.03.23, 8:17:43 AM] Bob: Hi` (English)
//! - `15.03.23, 20:22 - Alice: Hello` (German Android)
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{OperatingSystem, SystemLanguage};
//! use chatlens::registry::{FormatRegistry, FormatSpec};
//!
//! # fn main() -> chatlens::Result<()> {
//! let spec = FormatRegistry::lookup(SystemLanguage::Ger, OperatingSystem::Android)?;
//! assert_eq!(spec, FormatSpec::DashedDotMinutes);
//!
//! let spec = FormatRegistry::lookup_str("eng", "ios")?;
//! assert_eq!(spec, FormatSpec::BracketedDotTwelveHour);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{OperatingSystem, SystemLanguage};
use crate::error::ChatlensError;

/// How the date capture is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateShape {
    /// `DD/MM/YYYY`
    SlashDayMonthYear,
    /// `DD.MM.YY`
    DotDayMonthShortYear,
}

impl DateShape {
    /// Component separator.
    pub fn separator(self) -> char {
        match self {
            DateShape::SlashDayMonthYear => '/',
            DateShape::DotDayMonthShortYear => '.',
        }
    }

    /// Human-readable shape, used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            DateShape::SlashDayMonthYear => "DD/MM/YYYY",
            DateShape::DotDayMonthShortYear => "DD.MM.YY",
        }
    }
}

/// How the time capture is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeShape {
    /// `HH:MM:SS`, 24-hour
    Seconds24,
    /// `HH:MM`, 24-hour
    Minutes24,
    /// `H:MM:SS AM|PM`, 12-hour
    Seconds12,
}

impl TimeShape {
    /// Human-readable shape, used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TimeShape::Seconds24 => "HH:MM:SS (24-hour)",
            TimeShape::Minutes24 => "HH:MM (24-hour)",
            TimeShape::Seconds12 => "H:MM:SS AM|PM (12-hour)",
        }
    }
}

/// One supported line encoding.
///
/// Every variant captures date, time, author and message, in that order.
/// Variants are matched independently; a 12-hour line never falls through to
/// a 24-hour pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FormatSpec {
    /// `[DD/MM/YYYY HH:MM:SS] Author: Message`
    BracketedSlashSeconds,
    /// `[DD.MM.YY, H:MM:SS AM] Author: Message`
    BracketedDotTwelveHour,
    /// `DD.MM.YY, HH:MM - Author: Message`
    DashedDotMinutes,
}

impl FormatSpec {
    /// Returns the anchored regex pattern for this format.
    ///
    /// Groups: 1 date, 2 time, 3 author, 4 message.
    pub fn pattern(self) -> &'static str {
        match self {
            // [15/03/2023 20:22:06] Alice: Hello
            FormatSpec::BracketedSlashSeconds => {
                r"^\[(\d{2}/\d{2}/\d{4}) (\d{2}:\d{2}:\d{2})\] ([^:]+): (.*)$"
            }
            // [15.03.23, 8:17:43 AM] Bob: Hi   (U+202F before AM on newer iOS)
            FormatSpec::BracketedDotTwelveHour => {
                r"^\[(\d{2}\.\d{2}\.\d{2}), (\d{1,2}:\d{2}:\d{2}[ \x{202F}][AP]M)\] ([^:]+): (.*)$"
            }
            // 15.03.23, 20:22 - Alice: Hello
            FormatSpec::DashedDotMinutes => {
                r"^(\d{2}\.\d{2}\.\d{2}), (\d{2}:\d{2}) - ([^:]+): (.*)$"
            }
        }
    }

    /// Literal text around the four captures:
    /// `[prefix, date→time, time→author, author→message]`.
    pub fn delimiters(self) -> [&'static str; 4] {
        match self {
            FormatSpec::BracketedSlashSeconds => ["[", " ", "] ", ": "],
            FormatSpec::BracketedDotTwelveHour => ["[", ", ", "] ", ": "],
            FormatSpec::DashedDotMinutes => ["", ", ", " - ", ": "],
        }
    }

    /// Date layout of this format.
    pub fn date_shape(self) -> DateShape {
        match self {
            FormatSpec::BracketedSlashSeconds => DateShape::SlashDayMonthYear,
            FormatSpec::BracketedDotTwelveHour | FormatSpec::DashedDotMinutes => {
                DateShape::DotDayMonthShortYear
            }
        }
    }

    /// Time layout of this format.
    pub fn time_shape(self) -> TimeShape {
        match self {
            FormatSpec::BracketedSlashSeconds => TimeShape::Seconds24,
            FormatSpec::BracketedDotTwelveHour => TimeShape::Seconds12,
            FormatSpec::DashedDotMinutes => TimeShape::Minutes24,
        }
    }

    /// Returns all format variants.
    pub fn all() -> &'static [FormatSpec] {
        &[
            FormatSpec::BracketedSlashSeconds,
            FormatSpec::BracketedDotTwelveHour,
            FormatSpec::DashedDotMinutes,
        ]
    }

    /// Example line, used in help output and tests.
    pub fn example(self) -> &'static str {
        match self {
            FormatSpec::BracketedSlashSeconds => "[15/03/2023 20:22:06] Alice: Hello",
            FormatSpec::BracketedDotTwelveHour => "[15.03.23, 8:17:43 AM] Bob: Hi",
            FormatSpec::DashedDotMinutes => "15.03.23, 20:22 - Alice: Hello",
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::BracketedSlashSeconds => write!(f, "bracketed DD/MM/YYYY HH:MM:SS"),
            FormatSpec::BracketedDotTwelveHour => write!(f, "bracketed DD.MM.YY, H:MM:SS AM/PM"),
            FormatSpec::DashedDotMinutes => write!(f, "DD.MM.YY, HH:MM -"),
        }
    }
}

/// Registered (system language, operating system) pairs.
const REGISTRY: &[(SystemLanguage, OperatingSystem, FormatSpec)] = &[
    (
        SystemLanguage::Ger,
        OperatingSystem::Apple,
        FormatSpec::BracketedSlashSeconds,
    ),
    (
        SystemLanguage::Ger,
        OperatingSystem::Android,
        FormatSpec::DashedDotMinutes,
    ),
    (
        SystemLanguage::Eng,
        OperatingSystem::Apple,
        FormatSpec::BracketedDotTwelveHour,
    ),
    (
        SystemLanguage::Eng,
        OperatingSystem::Android,
        FormatSpec::BracketedDotTwelveHour,
    ),
];

/// Fixed lookup table from locale/platform to [`FormatSpec`].
pub struct FormatRegistry;

impl FormatRegistry {
    /// Returns the format registered for this pair.
    pub fn lookup(
        system_language: SystemLanguage,
        operating_system: OperatingSystem,
    ) -> Result<FormatSpec, ChatlensError> {
        REGISTRY
            .iter()
            .find(|(lang, os, _)| *lang == system_language && *os == operating_system)
            .map(|(_, _, spec)| *spec)
            .ok_or_else(|| {
                ChatlensError::unsupported_format(
                    system_language.as_str(),
                    operating_system.as_str(),
                )
            })
    }

    /// Same as [`lookup`](Self::lookup), from raw configuration strings.
    pub fn lookup_str(
        system_language: &str,
        operating_system: &str,
    ) -> Result<FormatSpec, ChatlensError> {
        let unsupported =
            || ChatlensError::unsupported_format(system_language, operating_system);
        let lang: SystemLanguage = system_language.parse().map_err(|_| unsupported())?;
        let os: OperatingSystem = operating_system.parse().map_err(|_| unsupported())?;
        Self::lookup(lang, os)
    }

    /// All registered pairs.
    pub fn entries() -> &'static [(SystemLanguage, OperatingSystem, FormatSpec)] {
        REGISTRY
    }
}
