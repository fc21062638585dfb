//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports into normalized records
//! and computing descriptive analytics over them.
//!
//! ## Overview
//!
//! WhatsApp writes its text exports in a different line format depending on
//! the phone's UI language and platform. Chatlens resolves the active format
//! from configuration, drops system notices, splits each message line into
//! date, time, author and message, and canonicalizes the timestamp. The
//! resulting [`MessageCorpus`] feeds independent analytics:
//!
//! - overall **sentiment** (VADER for English, a polarity lexicon for German)
//! - **emoji** ranking
//! - messages per **author**
//! - **activity** per hour, weekday and date
//! - **word** frequencies for a word cloud
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AnalysisConfig::new()
//!         .with_system_language(SystemLanguage::Ger)
//!         .with_operating_system(OperatingSystem::Android);
//!
//!     let outcome = ChatLogParser::new(&config)?.parse("chat.txt".as_ref())?;
//!     let report = analyze(&outcome.corpus, &config);
//!
//!     println!("{}", ConsoleReport::new(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Formats
//!
//! | System language | OS | Example line |
//! |-----------------|----|--------------|
//! | ger | apple | `[15/03/2023 20:22:06] Alice: Hello` |
//! | eng | apple, android | `[15.03.23, 8:17:43 AM] Bob: Hi` |
//! | ger | android | `15.03.23, 20:22 - Alice: Hello` |
//!
//! ## Module Structure
//!
//! - [`registry`] — [`FormatRegistry`](registry::FormatRegistry), [`FormatSpec`](registry::FormatSpec)
//! - [`parsing`] — line classifier, record parser, timestamp normalizer
//! - [`parser`] — [`ChatLogParser`](parser::ChatLogParser), the whole-export pipeline
//! - [`record`] — [`ChatRecord`], [`ChatTime`], [`MessageCorpus`]
//! - [`analytics`] — sentiment, emoji, author, activity and word analyses
//! - [`report`] — console rendering of an analysis
//! - `charts` — SVG charts (feature `charts`)
//! - [`core`] — filtering, parse statistics, corpus export writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) dispatch
//! - [`config`] — [`AnalysisConfig`](config::AnalysisConfig) and TOML loading
//! - `cli` — clap arguments (feature `cli`)
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod analytics;
#[cfg(feature = "charts")]
pub mod charts;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod registry;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::{ChatRecord, ChatTime, MessageCorpus};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{ChatRecord, ChatTime, MessageCorpus};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Configuration
    pub use crate::config::{
        AnalysisConfig, ChatLanguage, MalformedPolicy, OperatingSystem, SystemLanguage,
    };

    // Formats and parsing
    pub use crate::parser::{ChatLogParser, ParseOutcome};
    pub use crate::registry::{FormatRegistry, FormatSpec};

    // Analytics and reporting
    pub use crate::analytics::{AnalysisReport, analyze};
    pub use crate::report::ConsoleReport;

    // Filtering and export
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::ParseStats;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
