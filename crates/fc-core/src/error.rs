use std::path::PathBuf;

/// Alias for `Result<T, FortuneError>`.
pub type FortuneResult<T> = Result<T, FortuneError>;

/// Errors that can occur when loading or selecting fortunes.
#[derive(Debug, thiserror::Error)]
pub enum FortuneError {
    /// A selection was attempted on an empty sequence.
    #[error("cannot select a fortune from an empty list")]
    EmptyInput,

    /// A selection index fell outside the sequence.
    #[error("index {index} out of range for {len} fortunes")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },

    /// An hour outside `0..24` was supplied.
    #[error("hour must be between 0 and 23, got {0}")]
    HourOutOfRange(u32),

    /// A fortune in the source document has no text.
    #[error("fortune #{index} has no text")]
    EmptyText {
        /// Zero-based position of the entry in the source document.
        index: usize,
    },

    /// An entry in the source document is neither a string nor a fortune object.
    #[error("fortune #{index} is invalid: {source}")]
    InvalidEntry {
        /// Zero-based position of the entry in the source document.
        index: usize,
        /// Why the entry was rejected.
        #[source]
        source: serde_json::Error,
    },

    /// No fortune belongs to the requested category.
    #[error("no fortunes found in category \"{category}\" (available: {})", .available.join(", "))]
    NoMatch {
        /// The category that was asked for.
        category: String,
        /// Every category present in the loaded fortunes.
        available: Vec<String>,
    },

    /// The fortune source could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the fortune source.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fortune source is not a valid fortune document.
    #[error("invalid fortune document: {0}")]
    Parse(#[from] serde_json::Error),
}
