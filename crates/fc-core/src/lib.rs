//! Core types for Fortune Cow: fortune records, the category index, and
//! fortune selection.
//!
//! Everything impure (the wall clock, the random source) is kept at the edges.
//! [`greeting_for_hour`] takes the hour and [`select_at`] takes the index, so
//! the selection and formatting logic can be exercised deterministically.

/// Fortune collections and the JSON source format.
pub mod book;
/// Runtime configuration for loading and selecting fortunes.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Time-of-day greetings and message composition.
pub mod greeting;
/// Distinct categories and per-category counts.
pub mod index;
/// Moods and their eye glyphs.
pub mod mood;
/// The fortune record value type.
pub mod record;
/// Category filtering and random selection.
pub mod select;
/// Composition of a complete fortune reading.
pub mod teller;

/// Re-export the fortune collection.
pub use book::FortuneBook;
/// Re-export configuration.
pub use config::FortuneConfig;
/// Re-export error types.
pub use error::{FortuneError, FortuneResult};
/// Re-export greeting helpers.
pub use greeting::{compose_message, current_hour, greeting_for_hour};
/// Re-export category index types.
pub use index::{CategoryCount, CategoryIndex};
/// Re-export mood types.
pub use mood::{Mood, eyes_for_mood};
/// Re-export the record type.
pub use record::{FortuneRecord, UNSPECIFIED_CATEGORY};
/// Re-export selection functions.
pub use select::{filter_by_category, select_at, select_random};
/// Re-export the reading type.
pub use teller::{Reading, tell};
