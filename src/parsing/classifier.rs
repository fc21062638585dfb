//! System line detection.
//!
//! The chat app writes its own notices into the export (encryption banner,
//! invite-link joins, deleted messages, media placeholders). Those lines often
//! have the same shape as real messages, so they are removed before the
//! format pattern is applied.

use crate::config::DEFAULT_SYSTEM_MESSAGES;

/// Classifies raw lines by literal marker containment.
///
/// Matching is case-sensitive substring search over the whole line; a hit on
/// any marker makes the line a system line.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::SystemLineClassifier;
///
/// let classifier = SystemLineClassifier::new(["image omitted"]);
/// assert!(classifier.is_system_line("[15.03.23, 8:17:43 AM] Bob: image omitted"));
/// assert!(!classifier.is_system_line("[15.03.23, 8:17:43 AM] Bob: Image Omitted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemLineClassifier {
    markers: Vec<String>,
}

impl SystemLineClassifier {
    /// Creates a classifier from an ordered set of markers.
    ///
    /// Empty markers are ignored; they would match every line.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// Returns `true` when the line is a system notice and must be excluded.
    pub fn is_system_line(&self, line: &str) -> bool {
        self.matching_marker(line).is_some()
    }

    /// Returns the first marker found in the line.
    pub fn matching_marker(&self, line: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|marker| line.contains(marker.as_str()))
            .map(String::as_str)
    }

    /// Configured markers, in order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for SystemLineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_MESSAGES.iter().copied())
    }
}
