//! Temporal activity histograms.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::record::MessageCorpus;

/// Weekdays in bucket order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Hourly message counts of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorHours {
    pub author: String,
    pub hours: [usize; 24],
}

impl AuthorHours {
    pub fn total(&self) -> usize {
        self.hours.iter().sum()
    }
}

/// When messages were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityProfile {
    /// Messages per hour of day, index = hour
    pub by_hour: [usize; 24],
    /// Messages per weekday, Monday first
    pub by_weekday: [usize; 7],
    /// Messages per calendar date, ascending
    pub by_date: BTreeMap<NaiveDate, usize>,
    /// Hourly counts per author, in first-seen author order
    pub by_author_hour: Vec<AuthorHours>,
}

impl Default for ActivityProfile {
    fn default() -> Self {
        Self {
            by_hour: [0; 24],
            by_weekday: [0; 7],
            by_date: BTreeMap::new(),
            by_author_hour: Vec::new(),
        }
    }
}

impl ActivityProfile {
    /// Builds all histograms in one pass.
    pub fn from_corpus(corpus: &MessageCorpus) -> Self {
        let mut profile = Self::default();

        for record in corpus {
            let hour = record.hour() as usize;
            profile.by_hour[hour] += 1;
            profile.by_weekday[record.weekday().num_days_from_monday() as usize] += 1;
            *profile.by_date.entry(record.date()).or_insert(0) += 1;

            let author = record.display_author();
            match profile
                .by_author_hour
                .iter_mut()
                .find(|entry| entry.author == author)
            {
                Some(entry) => entry.hours[hour] += 1,
                None => {
                    let mut hours = [0; 24];
                    hours[hour] = 1;
                    profile.by_author_hour.push(AuthorHours { author, hours });
                }
            }
        }

        profile
    }

    /// Total messages counted.
    pub fn total(&self) -> usize {
        self.by_hour.iter().sum()
    }

    /// Returns `true` when no messages were counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The `n` busiest hours as `(hour, count)`, descending; ties go to the
    /// earlier hour. Hours without messages are left out.
    pub fn busiest_hours(&self, n: usize) -> Vec<(u32, usize)> {
        let mut hours: Vec<(u32, usize)> = (0u32..)
            .zip(self.by_hour.iter().copied())
            .filter(|(_, count)| *count > 0)
            .collect();
        hours.sort_by(|a, b| b.1.cmp(&a.1));
        hours.truncate(n);
        hours
    }

    /// The weekday with most messages, if any.
    pub fn busiest_weekday(&self) -> Option<(Weekday, usize)> {
        WEEKDAYS
            .iter()
            .zip(self.by_weekday.iter())
            .filter(|(_, count)| **count > 0)
            .fold(None, |best: Option<(Weekday, usize)>, (day, count)| match best {
                Some((_, c)) if c >= *count => best,
                _ => Some((*day, *count)),
            })
    }
}
