//! Moods and the eye glyphs they select.
//!
//! The glyph mapping is a table indexed by the mood's discriminant, so every
//! variant has exactly one entry and the compiler checks the table length.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The mood of a fortune. Unknown or missing moods collapse into [`Mood::Other`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mood {
    /// Upbeat, motivating.
    Encouraging = 0,
    /// Thoughtful, earnest.
    Serious = 1,
    /// Light-hearted.
    Playful = 2,
    /// Anything else, including no mood at all.
    #[default]
    Other = 3,
}

/// Eye glyphs, indexed by `Mood as usize`.
const EYES: [&str; 4] = ["^^", "==", "Oo", "oo"];

impl Mood {
    /// Every mood, in discriminant order.
    pub const ALL: [Mood; 4] = [Mood::Encouraging, Mood::Serious, Mood::Playful, Mood::Other];

    /// Parse a mood name (case-insensitive). Unknown names map to [`Mood::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "encouraging" => Mood::Encouraging,
            "serious" => Mood::Serious,
            "playful" => Mood::Playful,
            _ => Mood::Other,
        }
    }

    /// The lower-case name of this mood.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Encouraging => "encouraging",
            Mood::Serious => "serious",
            Mood::Playful => "playful",
            Mood::Other => "other",
        }
    }
}

impl From<String> for Mood {
    fn from(name: String) -> Self {
        Mood::parse(&name)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two-character eye glyph for a mood.
pub fn eyes_for_mood(mood: Mood) -> &'static str {
    EYES[mood as usize]
}
