//! Console report.
//!
//! [`ConsoleReport`] renders an [`AnalysisReport`] as plain text through
//! [`Display`](fmt::Display), so the binary prints it and tests compare it.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::analyze;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::record::MessageCorpus;
//! use chatlens::report::ConsoleReport;
//!
//! let report = analyze(&MessageCorpus::default(), &AnalysisConfig::default());
//! let text = ConsoleReport::new(&report).to_string();
//! assert!(text.contains("no data"));
//! ```

use std::fmt;

use crate::analytics::{AnalysisReport, Aggregation, SentimentSummary};

const NO_DATA: &str = "  (no data)";

/// Text rendering of an [`AnalysisReport`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a> {
    report: &'a AnalysisReport,
    busiest_hours: usize,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self {
            report,
            busiest_hours: 3,
        }
    }

    /// Number of hours listed under "Busiest hours".
    #[must_use]
    pub fn with_busiest_hours(mut self, n: usize) -> Self {
        self.busiest_hours = n;
        self
    }

    fn write_sentiment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentiment:")?;
        let Some(summary) = &self.report.sentiment else {
            return writeln!(f, "{NO_DATA}");
        };
        writeln!(f, "  The overall sentiment is {}.", summary.polarity)?;
        write_sentiment_detail(f, summary)
    }

    fn write_emojis(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ranking of most frequent emojis:")?;
        if self.report.emojis.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        let width = self
            .report
            .emojis
            .iter()
            .map(|e| e.count.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, entry) in self.report.emojis.iter().enumerate() {
            let rank = format!("{}.", i + 1);
            writeln!(
                f,
                "  {rank:<4}{}  {:>width$} times",
                entry.emoji, entry.count
            )?;
        }
        Ok(())
    }

    fn write_authors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ranking in terms of the number of messages written:")?;
        if self.report.authors.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        for entry in &self.report.authors {
            writeln!(f, "  {}: {}", entry.author, entry.count)?;
        }
        Ok(())
    }

    fn write_activity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activity = &self.report.activity;
        writeln!(f, "Busiest hours:")?;
        if activity.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        for (hour, count) in activity.busiest_hours(self.busiest_hours) {
            writeln!(f, "  {hour:02}:00-{hour:02}:59  {count} messages")?;
        }
        if let Some((weekday, count)) = activity.busiest_weekday() {
            writeln!(f, "Busiest weekday: {weekday} ({count} messages)")?;
        }
        Ok(())
    }

    fn write_words(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most frequent words:")?;
        if self.report.words.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        let line = self
            .report
            .words
            .iter()
            .take(10)
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  {line}")
    }
}

fn write_sentiment_detail(f: &mut fmt::Formatter<'_>, summary: &SentimentSummary) -> fmt::Result {
    match summary.aggregation {
        Aggregation::ProportionSums => {
            if let Some(share) = summary.dominant_share {
                writeln!(f, "  Share: {}", round4(share))?;
            }
        }
        Aggregation::SignCounts => {
            writeln!(
                f,
                "  Positive: {}, negative: {}, neutral: {}",
                summary.positive, summary.negative, summary.neutral
            )?;
            if let Some(average) = summary.average {
                writeln!(f, "  The average value is {}.", round4(average))?;
            }
        }
    }
    Ok(())
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sentiment(f)?;
        writeln!(f)?;
        self.write_emojis(f)?;
        writeln!(f)?;
        self.write_authors(f)?;
        writeln!(f)?;
        self.write_activity(f)?;
        writeln!(f)?;
        self.write_words(f)
    }
}
