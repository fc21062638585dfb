//! Sentiment scoring and aggregation.
//!
//! Scoring is pluggable through [`SentimentScorer`]. English messages go
//! through VADER ([`VaderScorer`]); German messages through a small polarity
//! lexicon with negation and intensifier handling ([`GermanLexiconScorer`]).
//!
//! The two languages aggregate differently:
//!
//! | Method | Per message | Overall polarity decided by |
//! |--------|-------------|-----------------------------|
//! | [`Aggregation::ProportionSums`] | pos/neg/neu shares | Σpos vs Σneg |
//! | [`Aggregation::SignCounts`] | polarity in [-1, 1] | #positive vs #negative messages |

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::config::ChatLanguage;
use crate::record::MessageCorpus;

/// Polarity breakdown of one message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MessageSentiment {
    /// Share of positive content, 0-1
    pub positive: f64,
    /// Share of negative content, 0-1
    pub negative: f64,
    /// Share of neutral content, 0-1
    pub neutral: f64,
    /// Single polarity value, -1 to 1
    pub compound: f64,
}

/// Scores the polarity of a single message.
pub trait SentimentScorer {
    /// Returns the polarity breakdown of `text`.
    fn score(&self, text: &str) -> MessageSentiment;
}

/// English scorer backed by the VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> MessageSentiment {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
        MessageSentiment {
            positive: get("pos"),
            negative: get("neg"),
            neutral: get("neu"),
            compound: get("compound"),
        }
    }
}

/// German polarity words, scored in [-1, 1].
const GERMAN_LEXICON: &[(&str, f64)] = &[
    // positive
    ("gut", 0.7),
    ("super", 1.0),
    ("toll", 0.9),
    ("klasse", 0.9),
    ("prima", 0.8),
    ("schön", 0.8),
    ("cool", 0.7),
    ("geil", 0.8),
    ("genial", 1.0),
    ("perfekt", 1.0),
    ("wunderbar", 1.0),
    ("wundervoll", 1.0),
    ("fantastisch", 1.0),
    ("großartig", 1.0),
    ("hervorragend", 1.0),
    ("lieb", 0.7),
    ("liebe", 0.8),
    ("lieben", 0.8),
    ("mag", 0.5),
    ("freue", 0.8),
    ("freude", 0.8),
    ("froh", 0.7),
    ("glücklich", 0.9),
    ("danke", 0.6),
    ("dankbar", 0.8),
    ("lustig", 0.6),
    ("witzig", 0.6),
    ("spaß", 0.7),
    ("gerne", 0.5),
    ("gern", 0.5),
    ("richtig", 0.3),
    ("lecker", 0.7),
    ("nett", 0.6),
    ("hübsch", 0.7),
    ("bravo", 0.8),
    ("glückwunsch", 0.9),
    ("yay", 0.7),
    ("haha", 0.4),
    ("hahaha", 0.5),
    ("juhu", 0.8),
    // negative
    ("schlecht", -0.7),
    ("schlimm", -0.8),
    ("scheiße", -1.0),
    ("scheiss", -1.0),
    ("mist", -0.6),
    ("doof", -0.6),
    ("blöd", -0.6),
    ("dumm", -0.7),
    ("nervig", -0.6),
    ("nervt", -0.6),
    ("ärgerlich", -0.7),
    ("ärgern", -0.6),
    ("wütend", -0.8),
    ("sauer", -0.6),
    ("traurig", -0.8),
    ("schade", -0.5),
    ("leider", -0.4),
    ("hasse", -1.0),
    ("hass", -1.0),
    ("furchtbar", -0.9),
    ("schrecklich", -0.9),
    ("katastrophe", -1.0),
    ("krank", -0.6),
    ("müde", -0.4),
    ("langweilig", -0.6),
    ("angst", -0.7),
    ("sorge", -0.5),
    ("sorgen", -0.5),
    ("problem", -0.4),
    ("stress", -0.6),
    ("enttäuscht", -0.8),
    ("falsch", -0.5),
    ("kaputt", -0.6),
    ("teuer", -0.3),
    ("verloren", -0.6),
];

const GERMAN_NEGATIONS: &[&str] = &["nicht", "kein", "keine", "keinen", "nie", "niemals", "nix"];

const GERMAN_INTENSIFIERS: &[(&str, f64)] = &[
    ("sehr", 1.5),
    ("total", 1.5),
    ("echt", 1.3),
    ("extrem", 1.8),
    ("richtig", 1.3),
    ("ziemlich", 1.2),
    ("voll", 1.4),
    ("so", 1.2),
    ("mega", 1.6),
    ("wirklich", 1.3),
];

/// Lexicon scorer for German text.
///
/// Each known polarity word contributes its score; a preceding negation
/// within two tokens flips it, a directly preceding intensifier scales it.
/// The message polarity is the mean contribution, clamped to [-1, 1].
#[derive(Debug, Clone)]
pub struct GermanLexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl GermanLexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: GERMAN_LEXICON.iter().copied().collect(),
            intensifiers: GERMAN_INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl Default for GermanLexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for GermanLexiconScorer {
    fn score(&self, text: &str) -> MessageSentiment {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return MessageSentiment {
                neutral: 1.0,
                ..MessageSentiment::default()
            };
        }

        let mut contributions = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(*token) else {
                continue;
            };
            // "richtig gut": the intensifier reading wins
            if i + 1 < tokens.len()
                && self.intensifiers.contains_key(*token)
                && self.lexicon.contains_key(tokens[i + 1])
            {
                continue;
            }

            let mut value = base;
            if i > 0 {
                if let Some(factor) = self.intensifiers.get(tokens[i - 1]) {
                    value *= factor;
                }
            }
            let window = &tokens[i.saturating_sub(2)..i];
            if window.iter().any(|t| GERMAN_NEGATIONS.contains(t)) {
                value = -value;
            }
            contributions.push(value);
        }

        if contributions.is_empty() {
            return MessageSentiment {
                neutral: 1.0,
                ..MessageSentiment::default()
            };
        }

        let n = tokens.len() as f64;
        let positive = contributions.iter().filter(|v| **v > 0.0).count() as f64 / n;
        let negative = contributions.iter().filter(|v| **v < 0.0).count() as f64 / n;
        let compound = (contributions.iter().sum::<f64>() / contributions.len() as f64)
            .clamp(-1.0, 1.0);

        MessageSentiment {
            positive,
            negative,
            neutral: 1.0 - positive - negative,
            compound,
        }
    }
}

/// How per-message scores are folded into an overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Sum the positive, negative and neutral shares
    ProportionSums,
    /// Count messages by the sign of their polarity
    SignCounts,
}

impl Aggregation {
    /// Aggregation used for a chat language.
    pub fn for_language(language: ChatLanguage) -> Self {
        match language {
            ChatLanguage::Eng => Aggregation::ProportionSums,
            ChatLanguage::Ger => Aggregation::SignCounts,
        }
    }
}

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Aggregated sentiment of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    /// Overall verdict
    pub polarity: Polarity,
    /// How the verdict was reached
    pub aggregation: Aggregation,
    /// Messages scored
    pub messages: usize,
    /// Σpos (proportion sums) or number of positive messages (sign counts)
    pub positive: f64,
    /// Σneg or number of negative messages
    pub negative: f64,
    /// Σneu or number of neutral messages
    pub neutral: f64,
    /// Dominant side divided by message count; proportion sums only, and only
    /// when the verdict isn't neutral
    pub dominant_share: Option<f64>,
    /// Mean polarity; sign counts only
    pub average: Option<f64>,
}

/// Scores every message and aggregates the result.
///
/// Returns `None` for an empty corpus.
pub fn summarize(
    corpus: &MessageCorpus,
    scorer: &dyn SentimentScorer,
    aggregation: Aggregation,
) -> Option<SentimentSummary> {
    if corpus.is_empty() {
        return None;
    }

    let scores: Vec<MessageSentiment> = corpus.iter().map(|r| scorer.score(r.message())).collect();
    let n = scores.len() as f64;

    let (positive, negative, neutral) = match aggregation {
        Aggregation::ProportionSums => scores.iter().fold((0.0, 0.0, 0.0), |acc, s| {
            (acc.0 + s.positive, acc.1 + s.negative, acc.2 + s.neutral)
        }),
        Aggregation::SignCounts => scores.iter().fold((0.0, 0.0, 0.0), |acc, s| {
            if s.compound > 0.0 {
                (acc.0 + 1.0, acc.1, acc.2)
            } else if s.compound < 0.0 {
                (acc.0, acc.1 + 1.0, acc.2)
            } else {
                (acc.0, acc.1, acc.2 + 1.0)
            }
        }),
    };

    let polarity = if positive > negative {
        Polarity::Positive
    } else if positive < negative {
        Polarity::Negative
    } else {
        Polarity::Neutral
    };

    let (dominant_share, average) = match aggregation {
        Aggregation::ProportionSums => {
            let share = match polarity {
                Polarity::Positive => Some(positive / n),
                Polarity::Negative => Some(negative / n),
                Polarity::Neutral => None,
            };
            (share, None)
        }
        Aggregation::SignCounts => {
            let sum: f64 = scores.iter().map(|s| s.compound).sum();
            (None, Some(sum / n))
        }
    };

    Some(SentimentSummary {
        polarity,
        aggregation,
        messages: scores.len(),
        positive,
        negative,
        neutral,
        dominant_share,
        average,
    })
}

/// Scorer for a chat language.
pub fn scorer_for(language: ChatLanguage) -> Box<dyn SentimentScorer> {
    match language {
        ChatLanguage::Eng => Box::new(VaderScorer::new()),
        ChatLanguage::Ger => Box::new(GermanLexiconScorer::new()),
    }
}
