//! Custom error types for the plendict-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictError {
    /// No candidate directory held the complete set of dictionary files.
    #[error("Dictionary files {files:?} not found in any of {searched} location(s)")]
    NotFound {
        files: Vec<&'static str>,
        searched: usize,
    },

    /// The requested language is unknown or not handled by the engine.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The file is structurally invalid (bad magic, malformed page, missing terminator).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A fixed-size field could not be read or seeked to.
    #[error("Truncated data while reading {context}: {source}")]
    Truncated {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A declared count of items does not match the actual number of items found.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },

    /// An entry index past the end of the word list.
    #[error("Index {index} is out of range (dictionary holds {size} entries)")]
    OutOfRange { index: usize, size: usize },
}

impl DictError {
    /// True for every failure caused by malformed or short dictionary data.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DictError::InvalidFormat(_) | DictError::Truncated { .. } | DictError::CountMismatch { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `DictError` type.
pub type Result<T> = std::result::Result<T, DictError>;

/// Attaches the name of the field being read to low-level I/O failures.
pub trait ReadContext<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> ReadContext<T> for std::io::Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|source| DictError::Truncated { context, source })
    }
}
