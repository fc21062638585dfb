//! Configuration types for parsing and analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies. The same structs deserialize
//! from a TOML file, so a run can be described once and reused.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, OperatingSystem, SystemLanguage};
//!
//! let config = AnalysisConfig::new()
//!     .with_system_language(SystemLanguage::Ger)
//!     .with_operating_system(OperatingSystem::Android)
//!     .with_system_message("hat die Gruppe verlassen");
//!
//! assert!(config.system_messages.iter().any(|m| m == "hat die Gruppe verlassen"));
//! ```
//!
//! # TOML
//!
//! ```toml
//! chat_language = "ger"
//! system_language = "eng"
//! operating_system = "ios"
//! irrelevant_words = ["haha", "ok"]
//! on_malformed = "skip"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::ChatlensError;

/// Natural language the participants write in.
///
/// Selects the sentiment strategy and the stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ChatLanguage {
    /// English
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "en"))]
    Eng,
    /// German
    #[cfg_attr(feature = "cli", value(alias = "de"))]
    Ger,
}

/// UI language of the phone that produced the export.
///
/// Selects the line format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SystemLanguage {
    /// English
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "en"))]
    Eng,
    /// German
    #[cfg_attr(feature = "cli", value(alias = "de"))]
    Ger,
}

/// Platform the export was produced on.
///
/// Selects the line format variant within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// iPhone exports
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "ios"))]
    Apple,
    /// Android exports
    Android,
}

/// What to do when a line matches the format but its timestamp doesn't
/// canonicalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop the run and report the offending line (default)
    #[default]
    Abort,
    /// Drop the record, log a warning and keep going
    Skip,
}

macro_rules! impl_language_str {
    ($ty:ident, $what:literal, { $($name:literal $(| $alias:literal)* => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Returns the canonical configuration name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name $(| $alias)* => Ok($ty::$variant),)+
                    _ => Err(format!(
                        "Unknown {}: '{}'. Expected one of: {}",
                        $what,
                        s,
                        [$($name),+].join(", ")
                    )),
                }
            }
        }

        // Goes through `FromStr` so TOML accepts the same spellings as the CLI.
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

impl_language_str!(ChatLanguage, "chat language", {
    "eng" | "en" => Eng,
    "ger" | "de" => Ger,
});

impl_language_str!(SystemLanguage, "system language", {
    "eng" | "en" => Eng,
    "ger" | "de" => Ger,
});

impl_language_str!(OperatingSystem, "operating system", {
    "apple" | "ios" => Apple,
    "android" => Android,
});

impl_language_str!(MalformedPolicy, "malformed timestamp policy", {
    "abort" => Abort,
    "skip" => Skip,
});

/// Markers of lines the chat app writes itself.
///
/// Matched case-sensitively as substrings of the whole raw line.
pub const DEFAULT_SYSTEM_MESSAGES: &[&str] = &[
    // English
    "Messages and calls are end-to-end encrypted",
    "joined using this group's invite link",
    "This message was deleted",
    "You deleted this message",
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
    "<Media omitted>",
    "security code changed",
    // German
    "Nachrichten und Anrufe sind Ende-zu-Ende-verschlüsselt",
    "ist über den Einladungslink dieser Gruppe beigetreten",
    "Diese Nachricht wurde gelöscht",
    "Du hast diese Nachricht gelöscht",
    "Bild weggelassen",
    "Video weggelassen",
    "Audio weggelassen",
    "Sticker weggelassen",
    "GIF weggelassen",
    "Dokument weggelassen",
    "<Medien ausgeschlossen>",
    "Sicherheitsnummer hat sich geändert",
];

/// Tokens dropped from word frequencies on top of the language stopwords.
pub const DEFAULT_IRRELEVANT_WORDS: &[&str] = &[
    "omitted", "audio", "image", "https", "sticker", "joined", "deleted", "using", "invite",
    "link", "group", "s", "vm",
];

/// Configuration for one analysis run.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{AnalysisConfig, ChatLanguage, MalformedPolicy};
///
/// # fn main() -> chatlens::Result<()> {
/// let config = AnalysisConfig::from_toml_str(r#"
///     chat_language = "ger"
///     on_malformed = "skip"
/// "#)?;
///
/// assert_eq!(config.chat_language, ChatLanguage::Ger);
/// assert_eq!(config.on_malformed, MalformedPolicy::Skip);
/// assert_eq!(config.top_emojis, 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Language of the messages (default: eng)
    pub chat_language: ChatLanguage,

    /// Phone UI language of the exporter (default: eng)
    pub system_language: SystemLanguage,

    /// Exporting platform (default: apple)
    pub operating_system: OperatingSystem,

    /// Substrings marking system lines (default: [`DEFAULT_SYSTEM_MESSAGES`])
    pub system_messages: Vec<String>,

    /// Extra tokens excluded from word frequencies
    /// (default: [`DEFAULT_IRRELEVANT_WORDS`])
    pub irrelevant_words: Vec<String>,

    /// Directory charts are written to (default: `output`)
    pub output_dir: PathBuf,

    /// Malformed timestamp handling (default: abort)
    pub on_malformed: MalformedPolicy,

    /// Length of the emoji ranking (default: 10)
    pub top_emojis: usize,

    /// Words kept for the word cloud (default: 50)
    pub max_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chat_language: ChatLanguage::default(),
            system_language: SystemLanguage::default(),
            operating_system: OperatingSystem::default(),
            system_messages: DEFAULT_SYSTEM_MESSAGES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            irrelevant_words: DEFAULT_IRRELEVANT_WORDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            output_dir: PathBuf::from("output"),
            on_malformed: MalformedPolicy::default(),
            top_emojis: 10,
            max_words: 50,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ChatlensError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ChatlensError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ChatlensError::config(e.to_string(), Some(path.to_path_buf())))
    }

    /// Sets the chat language.
    #[must_use]
    pub fn with_chat_language(mut self, language: ChatLanguage) -> Self {
        self.chat_language = language;
        self
    }

    /// Sets the system language.
    #[must_use]
    pub fn with_system_language(mut self, language: SystemLanguage) -> Self {
        self.system_language = language;
        self
    }

    /// Sets the operating system.
    #[must_use]
    pub fn with_operating_system(mut self, os: OperatingSystem) -> Self {
        self.operating_system = os;
        self
    }

    /// Adds one system line marker.
    #[must_use]
    pub fn with_system_message(mut self, marker: impl Into<String>) -> Self {
        self.system_messages.push(marker.into());
        self
    }

    /// Replaces the system line markers.
    #[must_use]
    pub fn with_system_messages<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_messages = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one irrelevant word.
    #[must_use]
    pub fn with_irrelevant_word(mut self, word: impl Into<String>) -> Self {
        self.irrelevant_words.push(word.into());
        self
    }

    /// Sets the chart output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the malformed timestamp policy.
    #[must_use]
    pub fn with_on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Sets the emoji ranking length.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the word cloud size.
    #[must_use]
    pub fn with_max_words(mut self, n: usize) -> Self {
        self.max_words = n;
        self
    }
}
