//! Distinct categories and per-category counts.

use std::collections::HashMap;

use crate::record::FortuneRecord;

/// Number of fortunes in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount<'a> {
    /// The category label, borrowed from the records.
    pub category: &'a str,
    /// How many records carry it.
    pub count: usize,
}

/// A view over the distinct categories of a set of records, in first-seen order.
///
/// Categories are compared exactly, so `"Code"` and `"code"` are listed separately
/// even though filtering treats them alike.
#[derive(Debug, Clone)]
pub struct CategoryIndex<'a> {
    entries: Vec<CategoryCount<'a>>,
    total: usize,
}

impl<'a> CategoryIndex<'a> {
    /// Index the categories of `records`.
    pub fn new(records: &'a [FortuneRecord]) -> Self {
        let mut entries: Vec<CategoryCount<'a>> = Vec::new();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for record in records {
            let category = record.category.as_str();
            match positions.get(category) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    positions.insert(category, entries.len());
                    entries.push(CategoryCount { category, count: 1 });
                }
            }
        }

        Self {
            entries,
            total: records.len(),
        }
    }

    /// Distinct categories in the order they first appear.
    pub fn list_categories(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.category).collect()
    }

    /// Per-category counts, in first-seen order. They sum to [`Self::total`].
    pub fn count_by_category(&self) -> &[CategoryCount<'a>] {
        &self.entries
    }

    /// Total number of indexed records.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records were indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
