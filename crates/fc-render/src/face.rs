//! ASCII-art characters.
//!
//! Each template marks the left and right eye with `$l` and `$r`.

use std::fmt;
use std::str::FromStr;

/// Eyes used when the requested glyph is not exactly two characters.
pub const DEFAULT_EYES: &str = "oo";

const COW: &[&str] = &[
    r"        \   ^__^",
    r"         \  ($l$r)\_______",
    r"            (__)\       )\/\",
    r"                ||----w |",
    r"                ||     ||",
];

const TUX: &[&str] = &[
    r"   \",
    r"    \",
    r"        .--.",
    r"       |$l_$r |",
    r"       |:_/ |",
    r"      //   \ \",
    r"     (|     | )",
    r"    /'\_   _/`\",
    r"    \___)=(___/",
];

/// A character that can deliver a fortune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Face {
    /// The classic cow.
    Cow,
    /// Tux the penguin.
    #[default]
    Tux,
}

/// Returned when parsing a face name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown face \"{0}\" (available: cow, tux)")]
pub struct UnknownFace(pub String);

impl Face {
    /// Every face.
    pub const ALL: [Face; 2] = [Face::Cow, Face::Tux];

    /// The name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Face::Cow => "cow",
            Face::Tux => "tux",
        }
    }

    fn template(&self) -> &'static [&'static str] {
        match self {
            Face::Cow => COW,
            Face::Tux => TUX,
        }
    }

    /// Draw this face with the given eyes.
    pub fn art(&self, eyes: &str) -> String {
        let mut glyphs = eyes.chars();
        let (left, right) = match (glyphs.next(), glyphs.next(), glyphs.next()) {
            (Some(l), Some(r), None) => (l, r),
            _ => ('o', 'o'),
        };
        self.template()
            .iter()
            .map(|line| {
                line.replace("$l", &left.to_string())
                    .replace("$r", &right.to_string())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Face {
    type Err = UnknownFace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFace(s.to_string()))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
