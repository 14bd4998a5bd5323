//! Category filtering and random selection.

use rand::Rng;
use tracing::debug;

use crate::error::{FortuneError, FortuneResult};
use crate::record::FortuneRecord;

/// Records whose category equals `category`, ignoring case. Never fails; an
/// empty result is left for the caller to judge.
pub fn filter_by_category<'a>(
    records: &'a [FortuneRecord],
    category: &str,
) -> Vec<&'a FortuneRecord> {
    let wanted = category.to_lowercase();
    let matches: Vec<_> = records
        .iter()
        .filter(|r| r.category.to_lowercase() == wanted)
        .collect();
    debug!(category, matched = matches.len(), "filtered fortunes");
    matches
}

/// The item at `index`.
pub fn select_at<T>(items: &[T], index: usize) -> FortuneResult<&T> {
    if items.is_empty() {
        return Err(FortuneError::EmptyInput);
    }
    items.get(index).ok_or(FortuneError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

/// A uniformly random item, drawn with `rng`.
pub fn select_random<'a, T, R>(items: &'a [T], rng: &mut R) -> FortuneResult<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(FortuneError::EmptyInput);
    }
    let index = rng.random_range(0..items.len());
    debug!(index, of = items.len(), "selected fortune");
    select_at(items, index)
}
