//! Speech bubbles and ASCII-art characters for Fortune Cow.
//!
//! [`render`] word-wraps a message into a bubble and draws a [`Face`] below it
//! with the requested eyes.

/// Speech bubble layout.
pub mod bubble;
/// ASCII-art characters.
pub mod face;

/// Re-export bubble helpers.
pub use bubble::{balloon, wrap};
/// Re-export face types.
pub use face::{DEFAULT_EYES, Face, UnknownFace};

/// Narrowest bubble the renderer will wrap to.
pub const MIN_WIDTH: usize = 8;
/// Widest bubble the renderer will wrap to.
pub const MAX_WIDTH: usize = 200;

/// Layout options for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Column at which bubble text wraps.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl RenderConfig {
    /// Set the wrap width (clamped to [`MIN_WIDTH`]..=[`MAX_WIDTH`]).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        self
    }
}

/// What a character says, and how it looks while saying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speech<'a> {
    /// The message inside the bubble.
    pub text: &'a str,
    /// Which character speaks.
    pub face: Face,
    /// Two-character eye glyph.
    pub eyes: &'a str,
}

impl<'a> Speech<'a> {
    /// Create a new speech.
    pub fn new(text: &'a str, face: Face, eyes: &'a str) -> Self {
        Self { text, face, eyes }
    }
}

/// Render a speech bubble with the character underneath.
pub fn render(speech: &Speech<'_>, config: &RenderConfig) -> String {
    let lines = wrap(speech.text, config.width);
    let mut out = balloon(&lines);
    out.push('\n');
    out.push_str(&speech.face.art(speech.eyes));
    out
}
