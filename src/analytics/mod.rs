//! Descriptive analytics over a [`MessageCorpus`].
//!
//! Every function here is a pure reduction over `&MessageCorpus`; nothing
//! mutates the corpus and the consumers are independent of each other.
//!
//! - [`sentiment`] - overall polarity ([`SentimentSummary`])
//! - [`emoji`] - emoji ranking ([`EmojiCount`])
//! - [`authors`] - messages per author ([`AuthorCount`])
//! - [`activity`] - hour/weekday/date histograms ([`ActivityProfile`])
//! - [`words`] - word frequencies for the word cloud ([`WordCount`])
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::analyze;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::parser::ChatLogParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let config = AnalysisConfig::default();
//! let outcome = ChatLogParser::new(&config)?.parse_str(
//!     "[15.03.23, 8:17:43 AM] Bob: Good morning 😀\n[15.03.23, 8:20:00 AM] Alice: Morning!",
//! )?;
//!
//! let report = analyze(&outcome.corpus, &config);
//! assert_eq!(report.authors[0].author, "Bob");
//! assert_eq!(report.emojis[0].emoji, "😀");
//! assert_eq!(report.activity.by_hour[8], 2);
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod authors;
pub mod emoji;
pub mod sentiment;
pub mod stopwords;
pub mod words;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

pub use activity::{ActivityProfile, AuthorHours};
pub use authors::{AuthorCount, count_by_author};
pub use emoji::{EmojiClassifier, EmojiCount, UnicodeEmoji, extract_emojis, rank_emojis};
pub use sentiment::{
    Aggregation, GermanLexiconScorer, MessageSentiment, Polarity, SentimentScorer,
    SentimentSummary, VaderScorer,
};
pub use stopwords::StopwordSet;
pub use words::{WordCount, word_frequencies};

use crate::config::AnalysisConfig;
use crate::record::MessageCorpus;

/// Insertion-ordered counter.
///
/// [`ranked`](Tally::ranked) sorts by count with a stable sort, so equal
/// counts stay in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl Tally {
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn ranked(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Everything computed for one corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// `None` for an empty corpus
    pub sentiment: Option<SentimentSummary>,
    pub emojis: Vec<EmojiCount>,
    pub authors: Vec<AuthorCount>,
    pub activity: ActivityProfile,
    pub words: Vec<WordCount>,
}

impl AnalysisReport {
    /// Returns `true` when there was nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.activity.is_empty()
    }
}

/// Runs every analysis with the collaborators chosen by `config`.
pub fn analyze(corpus: &MessageCorpus, config: &AnalysisConfig) -> AnalysisReport {
    let scorer = sentiment::scorer_for(config.chat_language);
    let stopwords = StopwordSet::for_language(config.chat_language, &config.irrelevant_words);
    analyze_with(corpus, config, scorer.as_ref(), &UnicodeEmoji, &stopwords)
}

/// Runs every analysis with explicit collaborators.
pub fn analyze_with(
    corpus: &MessageCorpus,
    config: &AnalysisConfig,
    scorer: &dyn SentimentScorer,
    emoji: &dyn EmojiClassifier,
    stopwords: &StopwordSet,
) -> AnalysisReport {
    debug!(records = corpus.len(), language = %config.chat_language, "running analytics");

    AnalysisReport {
        sentiment: sentiment::summarize(
            corpus,
            scorer,
            Aggregation::for_language(config.chat_language),
        ),
        emojis: rank_emojis(corpus, emoji, config.top_emojis),
        authors: count_by_author(corpus),
        activity: ActivityProfile::from_corpus(corpus),
        words: word_frequencies(corpus, stopwords, config.max_words),
    }
}
