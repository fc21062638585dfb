//! Word frequencies for the word cloud.

use serde::Serialize;

use super::Tally;
use super::stopwords::StopwordSet;
use crate::record::MessageCorpus;

/// One word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Splits a message into normalized candidate words.
///
/// Tokens are lower-cased, lose a trailing `'s`, and must keep at least two
/// characters. Pure numbers are dropped.
///
/// ```rust
/// use chatlens::analytics::words::tokenize;
///
/// assert_eq!(tokenize("Anna's cat has 3 kittens, 12 total!"), vec!["anna", "cat", "has", "kittens", "total"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\''))
        .map(|token| token.trim_start_matches('\''))
        .filter_map(|token| {
            let lower = token.to_lowercase();
            let word = lower.strip_suffix("'s").unwrap_or(&lower).trim_end_matches('\'');
            if word.chars().count() < 2 || word.chars().all(|c| c.is_numeric()) {
                return None;
            }
            Some(word.to_string())
        })
        .collect()
}

/// Counts words across the corpus, skipping stopwords.
///
/// Sorted by descending count; ties keep first-seen order. At most
/// `max_words` entries are returned.
pub fn word_frequencies(
    corpus: &MessageCorpus,
    stopwords: &StopwordSet,
    max_words: usize,
) -> Vec<WordCount> {
    let mut tally = Tally::default();
    for record in corpus {
        for word in tokenize(record.message()) {
            if !stopwords.contains(&word) {
                tally.add(&word);
            }
        }
    }

    tally
        .ranked()
        .into_iter()
        .take(max_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
