//! Per-author message counts.

use serde::Serialize;

use super::Tally;
use crate::record::MessageCorpus;

/// One row of the author ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Counts records per author.
///
/// Authors are grouped by [`ChatRecord::display_author`](crate::ChatRecord::display_author),
/// so `~ Bob` and `Bob` are one participant. Sorted by descending count;
/// ties keep first-seen order.
pub fn count_by_author(corpus: &MessageCorpus) -> Vec<AuthorCount> {
    let mut tally = Tally::default();
    for record in corpus {
        tally.add(&record.display_author());
    }

    tally
        .ranked()
        .into_iter()
        .map(|(author, count)| AuthorCount { author, count })
        .collect()
}
