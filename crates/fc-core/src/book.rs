//! Fortune collections and the JSON source format.
//!
//! A fortune document is either a bare array of entries or an object with a
//! `fortunes` array. Each entry is a full record object or a plain string;
//! plain strings and records without a category or mood fall back to
//! [`UNSPECIFIED_CATEGORY`] and [`Mood::Other`].

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{FortuneError, FortuneResult};
use crate::index::CategoryIndex;
use crate::mood::Mood;
use crate::record::{FortuneRecord, UNSPECIFIED_CATEGORY};
use crate::select::filter_by_category;

/// The fortunes that ship with the binary.
const BUILTIN_FORTUNES: &str = r#"{
  "fortunes": [
    {
      "text": "Errors are teachers in disguise",
      "category": "debugging",
      "mood": "encouraging"
    },
    {
      "text": "Every expert was once a beginner",
      "category": "growth",
      "mood": "encouraging"
    },
    {
      "text": "Confusion is the first step to clarity",
      "category": "learning",
      "mood": "serious"
    },
    {
      "text": "Ask questions - that's how learning happens",
      "category": "learning",
      "mood": "encouraging"
    },
    {
      "text": "One small step today, one giant leap tomorrow",
      "category": "growth",
      "mood": "playful"
    },
    {
      "text": "Your code doesn't have to be perfect to be progress",
      "category": "growth",
      "mood": "serious"
    },
    {
      "text": "Debugging is just problem-solving with extra steps",
      "category": "debugging",
      "mood": "playful"
    }
  ]
}"#;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<Value>),
    Wrapped { fortunes: Vec<Value> },
}

#[derive(Deserialize)]
struct RawRecord {
    text: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    mood: Option<Mood>,
}

/// Convert one document entry, a plain string or a record object.
fn parse_entry(index: usize, entry: Value) -> FortuneResult<FortuneRecord> {
    let record = match entry {
        Value::String(text) => FortuneRecord::plain(text),
        other => {
            let raw: RawRecord = serde_json::from_value(other)
                .map_err(|source| FortuneError::InvalidEntry { index, source })?;
            let category = raw
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNSPECIFIED_CATEGORY.to_string());
            FortuneRecord::new(raw.text, category, raw.mood.unwrap_or_default())
        }
    };
    if record.text.trim().is_empty() {
        return Err(FortuneError::EmptyText { index });
    }
    Ok(record)
}

/// An immutable, validated collection of fortunes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneBook {
    records: Vec<FortuneRecord>,
}

impl FortuneBook {
    /// Parse a fortune document.
    pub fn from_json(source: &str) -> FortuneResult<Self> {
        let entries = match serde_json::from_str::<RawDocument>(source)? {
            RawDocument::List(entries) | RawDocument::Wrapped { fortunes: entries } => entries,
        };
        let records = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(i, entry))
            .collect::<FortuneResult<Vec<_>>>()?;
        debug!(count = records.len(), "parsed fortune document");
        Ok(Self { records })
    }

    /// Read and parse a fortune document from disk.
    pub fn load(path: &Path) -> FortuneResult<Self> {
        debug!(path = %path.display(), "loading fortunes");
        let source = std::fs::read_to_string(path).map_err(|source| FortuneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// The fortunes compiled into the binary.
    pub fn builtin() -> FortuneResult<Self> {
        Self::from_json(BUILTIN_FORTUNES)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[FortuneRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the category index over this book.
    pub fn index(&self) -> CategoryIndex<'_> {
        CategoryIndex::new(&self.records)
    }

    /// The records to draw from: every record, or only those in `category`.
    pub fn pool(&self, category: Option<&str>) -> FortuneResult<Vec<&FortuneRecord>> {
        match category {
            Some(category) => self.in_category(category),
            None => Ok(self.records.iter().collect()),
        }
    }

    /// Records in `category` (case-insensitive), failing with
    /// [`FortuneError::NoMatch`] if there are none.
    pub fn in_category(&self, category: &str) -> FortuneResult<Vec<&FortuneRecord>> {
        let matches = filter_by_category(&self.records, category);
        if matches.is_empty() {
            return Err(FortuneError::NoMatch {
                category: category.to_string(),
                available: self
                    .index()
                    .list_categories()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            });
        }
        Ok(matches)
    }
}
