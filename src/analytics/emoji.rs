//! Emoji extraction and ranking.
//!
//! Messages are split into extended grapheme clusters, so multi-code-point
//! emoji (skin tones, flags, ZWJ families) count as one symbol.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use super::Tally;
use crate::record::MessageCorpus;

const VARIATION_SELECTOR: char = '\u{fe0f}';
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1f3fb}'..='\u{1f3ff}';

/// Decides whether a grapheme cluster is an emoji.
pub trait EmojiClassifier {
    fn is_emoji(&self, grapheme: &str) -> bool;
}

/// Classifier backed by the Unicode emoji table of the `emojis` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, grapheme: &str) -> bool {
        if emojis::get(grapheme).is_some() {
            return true;
        }

        // Retry without skin tone modifiers and variation selectors
        let base: String = grapheme
            .chars()
            .filter(|c| !SKIN_TONES.contains(c) && *c != VARIATION_SELECTOR)
            .collect();
        // Plain digits, '#' and '*' are only emoji as keycaps
        if base.is_empty() || base.is_ascii() {
            return false;
        }
        emojis::get(&base).is_some() || emojis::get(&format!("{base}{VARIATION_SELECTOR}")).is_some()
    }
}

/// Emojis of one message, in order of appearance.
pub fn extract_emojis<'a>(text: &'a str, classifier: &dyn EmojiClassifier) -> Vec<&'a str> {
    text.graphemes(true)
        .filter(|g| classifier.is_emoji(g))
        .collect()
}

/// One row of the emoji ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Counts emojis across the corpus.
///
/// Sorted by descending count; ties keep first-seen order. At most `top`
/// entries are returned.
pub fn rank_emojis(
    corpus: &MessageCorpus,
    classifier: &dyn EmojiClassifier,
    top: usize,
) -> Vec<EmojiCount> {
    let mut tally = Tally::default();
    for record in corpus {
        for emoji in extract_emojis(record.message(), classifier) {
            tally.add(emoji);
        }
    }

    tally
        .ranked()
        .into_iter()
        .take(top)
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
