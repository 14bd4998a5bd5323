//! Composition of a complete fortune reading.

use rand::Rng;

use crate::error::FortuneResult;
use crate::greeting::{compose_message, greeting_for_hour};
use crate::mood::eyes_for_mood;
use crate::record::FortuneRecord;
use crate::select::select_random;

/// Everything needed to render one fortune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading<'a> {
    /// Time-of-day greeting.
    pub greeting: &'static str,
    /// The chosen fortune.
    pub record: &'a FortuneRecord,
    /// Eye glyph for the fortune's mood.
    pub eyes: &'static str,
    /// Greeting and fortune text combined.
    pub message: String,
}

/// Greet for `hour` and draw a fortune from `pool`.
pub fn tell<'a, R>(
    pool: &[&'a FortuneRecord],
    hour: u32,
    rng: &mut R,
) -> FortuneResult<Reading<'a>>
where
    R: Rng + ?Sized,
{
    let greeting = greeting_for_hour(hour)?;
    let record: &'a FortuneRecord = *select_random(pool, rng)?;
    Ok(Reading {
        greeting,
        record,
        eyes: eyes_for_mood(record.mood),
        message: compose_message(greeting, &record.text),
    })
}
