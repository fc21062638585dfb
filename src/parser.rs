//! Export parsing pipeline.
//!
//! [`ChatLogParser`] drives every line of an export through classification,
//! structural matching and timestamp normalization, and collects the
//! survivors into a [`MessageCorpus`].
//!
//! ```text
//! raw line ─► system? ─yes─► dropped (stats.system)
//!               │no
//!               ▼
//!          format match? ─no─► dropped (stats.unmatched)
//!               │yes
//!               ▼
//!          normalize ─err─► abort | skip (stats.malformed)
//!               │ok
//!               ▼
//!          ChatRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, OperatingSystem, SystemLanguage};
//! use chatlens::parser::ChatLogParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let config = AnalysisConfig::new()
//!     .with_system_language(SystemLanguage::Ger)
//!     .with_operating_system(OperatingSystem::Apple);
//! let parser = ChatLogParser::new(&config)?;
//!
//! let outcome = parser.parse_str("[15/03/2023 20:22:06] Alice: Hello there\n")?;
//! let record = &outcome.corpus.records()[0];
//! assert_eq!(record.date().to_string(), "2023-03-15");
//! assert_eq!(record.time().to_string(), "20:22");
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.message(), "Hello there");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{AnalysisConfig, MalformedPolicy};
use crate::core::processor::ParseStats;
use crate::error::ChatlensError;
use crate::parsing::{RecordParser, SystemLineClassifier, timestamp};
use crate::record::{ChatRecord, MessageCorpus};
use crate::registry::{FormatRegistry, FormatSpec};

/// Result of parsing one export.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Normalized records, in file order
    pub corpus: MessageCorpus,
    /// Per-category line counts
    pub stats: ParseStats,
}

/// Parser for one export format, resolved once from configuration.
///
/// The format is never auto-detected: a German iPhone export parsed with an
/// English configuration yields no records rather than wrong ones.
#[derive(Debug, Clone)]
pub struct ChatLogParser {
    classifier: SystemLineClassifier,
    records: RecordParser,
    on_malformed: MalformedPolicy,
}

impl ChatLogParser {
    /// Resolves the format for the configured language/platform pair.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::UnsupportedFormat`] when no format is
    /// registered for the pair.
    pub fn new(config: &AnalysisConfig) -> Result<Self, ChatlensError> {
        let spec = FormatRegistry::lookup(config.system_language, config.operating_system)?;
        let classifier = SystemLineClassifier::new(config.system_messages.iter().cloned());
        Self::with_spec(spec, classifier, config.on_malformed)
    }

    /// Creates a parser for an explicit format.
    pub fn with_spec(
        spec: FormatSpec,
        classifier: SystemLineClassifier,
        on_malformed: MalformedPolicy,
    ) -> Result<Self, ChatlensError> {
        Ok(Self {
            classifier,
            records: RecordParser::new(spec)?,
            on_malformed,
        })
    }

    /// Active line format.
    pub fn spec(&self) -> FormatSpec {
        self.records.spec()
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file can't be read,
    /// [`ChatlensError::Utf8`] if it isn't UTF-8, and any error of
    /// [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<ParseOutcome, ChatlensError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: format!("input file {}", path.display()),
            source,
        })?;
        info!(path = %path.display(), format = %self.spec(), "parsing export");
        self.parse_str(&content)
    }

    /// Parses an export file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<ParseOutcome, ChatlensError> {
        self.parse(Path::new(path))
    }

    /// Parses export content already in memory.
    ///
    /// Lines are numbered from 1. A leading byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Under [`MalformedPolicy::Abort`], returns
    /// [`ChatlensError::MalformedTimestamp`] for the first line whose
    /// timestamp doesn't canonicalize.
    pub fn parse_str(&self, content: &str) -> Result<ParseOutcome, ChatlensError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let spec = self.spec();
        let mut stats = ParseStats::default();
        let mut records = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank += 1;
                continue;
            }

            if self.classifier.is_system_line(line) {
                stats.system += 1;
                continue;
            }

            let Some(raw) = self.records.parse_line(line) else {
                stats.unmatched += 1;
                continue;
            };

            match timestamp::normalize(raw.date, raw.time, &spec) {
                Ok((date, time)) => {
                    records.push(ChatRecord::new(line_no, date, time, raw.author, raw.message));
                }
                Err(err) => {
                    let err = err.at_line(line_no);
                    match self.on_malformed {
                        MalformedPolicy::Abort => return Err(err),
                        MalformedPolicy::Skip => {
                            warn!(line = line_no, error = %err, "skipping record");
                            stats.malformed += 1;
                        }
                    }
                }
            }
        }

        stats.records = records.len();
        debug!(
            blank = stats.blank,
            system = stats.system,
            unmatched = stats.unmatched,
            malformed = stats.malformed,
            "dropped lines"
        );
        info!(records = stats.records, lines = stats.total_lines, "parsed export");

        Ok(ParseOutcome {
            corpus: MessageCorpus::new(records),
            stats,
        })
    }
}
