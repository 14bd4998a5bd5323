use std::fmt;

use crate::mood::Mood;

/// Category assigned to fortunes that do not name one.
pub const UNSPECIFIED_CATEGORY: &str = "unspecified";

/// A single fortune: the quote, its category, and its mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneRecord {
    /// The quote itself. Never empty once loaded through a [`crate::FortuneBook`].
    pub text: String,
    /// Grouping label used for filtering and counting.
    pub category: String,
    /// Mood that selects the character's eyes.
    pub mood: Mood,
}

impl FortuneRecord {
    /// Create a new record.
    pub fn new(text: impl Into<String>, category: impl Into<String>, mood: Mood) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            mood,
        }
    }

    /// Create a record with only text, as the unstructured fortune lists stored them.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, UNSPECIFIED_CATEGORY, Mood::Other)
    }
}

impl fmt::Display for FortuneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.text, self.category, self.mood)
    }
}
