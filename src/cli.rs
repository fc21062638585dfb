//! Command-line interface definition using clap.
//!
//! [`Args`] mirrors [`AnalysisConfig`]: every analysis setting can come from
//! a TOML file (`--config`) and be overridden by a flag.
//! [`Args::analysis_config`] merges the two, flags winning.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use chatlens::config::ChatLanguage;
//! use clap::Parser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let args = Args::parse_from(["chatlens", "chat.txt", "--chat-language", "ger"]);
//! let config = args.analysis_config()?;
//! assert_eq!(config.chat_language, ChatLanguage::Ger);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    AnalysisConfig, ChatLanguage, MalformedPolicy, OperatingSystem, SystemLanguage,
};
use crate::core::{FilterConfig, OutputConfig};
use crate::error::ChatlensError;
use crate::format::OutputFormat;

/// Analyze a WhatsApp chat export: sentiment, emojis, authors,
/// activity and word frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --system-language ger --os android
    chatlens chat.txt --chat-language ger --after 2024-01-01
    chatlens chat.txt --config chatlens.toml --no-charts
    chatlens chat.txt --export records.jsonl --timestamps")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// TOML configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language the messages are written in
    #[arg(short = 'l', long, value_enum)]
    pub chat_language: Option<ChatLanguage>,

    /// UI language of the exporting phone
    #[arg(short = 's', long, value_enum)]
    pub system_language: Option<SystemLanguage>,

    /// Exporting platform
    #[arg(long = "os", value_enum)]
    pub operating_system: Option<OperatingSystem>,

    /// Additional system line marker (repeatable)
    #[arg(long = "system-message", value_name = "TEXT")]
    pub system_messages: Vec<String>,

    /// Additional word excluded from the word cloud (repeatable)
    #[arg(long = "ignore-word", value_name = "WORD")]
    pub irrelevant_words: Vec<String>,

    /// Directory for the SVG charts
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// What to do with lines whose timestamp can't be read
    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedPolicy>,

    /// Length of the emoji ranking
    #[arg(long, value_name = "N")]
    pub top_emojis: Option<usize>,

    /// Words kept for the word cloud
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Export the normalized records to this file
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the export file extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include ISO timestamps in the export (seconds when the source had them)
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include source line numbers in the export
    #[arg(long)]
    pub line_numbers: bool,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only analyze messages from this author
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Loads `--config` (or defaults) and applies the flags on top.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, ChatlensError> {
        let base = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };
        Ok(self.apply_to(base))
    }

    /// Applies the flags that were given to `config`.
    pub fn apply_to(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(language) = self.chat_language {
            config = config.with_chat_language(language);
        }
        if let Some(language) = self.system_language {
            config = config.with_system_language(language);
        }
        if let Some(os) = self.operating_system {
            config = config.with_operating_system(os);
        }
        for marker in &self.system_messages {
            config = config.with_system_message(marker.clone());
        }
        for word in &self.irrelevant_words {
            config = config.with_irrelevant_word(word.clone());
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if let Some(policy) = self.on_malformed {
            config = config.with_on_malformed(policy);
        }
        if let Some(n) = self.top_emojis {
            config = config.with_top_emojis(n);
        }
        if let Some(n) = self.max_words {
            config = config.with_max_words(n);
        }
        config
    }

    /// Date and author filters from `--after`, `--before` and `--from`.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatlensError> {
        let mut filter = FilterConfig::new();
        if let Some(date) = &self.after {
            filter = filter.with_date_from(date)?;
        }
        if let Some(date) = &self.before {
            filter = filter.with_date_to(date)?;
        }
        if let Some(user) = &self.from {
            filter = filter.with_author(user.clone());
        }
        Ok(filter)
    }

    /// Export fields from `--timestamps` and `--line-numbers`.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.line_numbers {
            config = config.with_line_numbers();
        }
        config
    }

    /// Export format: `--format`, else the export file extension.
    pub fn export_format(&self) -> Result<OutputFormat, ChatlensError> {
        match (self.format, &self.export) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) if path.extension().is_some() => OutputFormat::from_path(path),
            _ => Ok(OutputFormat::default()),
        }
    }
}
