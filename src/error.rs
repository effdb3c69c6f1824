//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum covering the whole
//! pipeline: building a message sequence from a raw transcript, and querying
//! the aggregated statistics.
//!
//! # Error Taxonomy
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`MalformedInput`](ChatstatsError::MalformedInput) | parser | Transcript starts with a continuation line |
//! | [`Encoding`](ChatstatsError::Encoding) | parser | Input bytes are not valid UTF-8 |
//! | [`NotFound`](ChatstatsError::NotFound) | analyzer | Contact has no messages |
//! | [`DivisionUndefined`](ChatstatsError::DivisionUndefined) | analyzer | Ratio with a zero denominator |
//!
//! Undefined ratios are never reported as zero: a caller can always tell
//! "measured as zero" apart from "cannot be computed".

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageSequence;
///
/// fn load() -> Result<MessageSequence> {
///     chatstats::build("29/09/2019, 12:56 am - Alice: hello")
/// }
/// # assert_eq!(load().unwrap().len(), 1);
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// The transcript begins with a line that is not a message header.
    ///
    /// Any non-header line is continuation text for the previous message;
    /// when there is no previous message the input cannot be interpreted.
    #[error("Malformed transcript at line {line}: continuation line without a preceding message: {content:?}")]
    MalformedInput {
        /// 1-based line number in the raw transcript
        line: usize,
        /// The offending line
        content: String,
    },

    /// A per-contact query was made for a contact that sent no messages.
    #[error("Contact '{contact}' does not exist in this chat")]
    NotFound {
        /// The contact name that was requested
        contact: String,
    },

    /// A ratio was requested whose denominator is zero.
    #[error("Cannot compute {quantity}: denominator is zero")]
    DivisionUndefined {
        /// Name of the ratio, e.g. `"words per message"`
        quantity: &'static str,
    },

    /// The input is not valid UTF-8 text.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Encoding {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Io {
        /// The underlying I/O error
        #[source]
        source: io::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<io::Error> for ChatstatsError {
    fn from(source: io::Error) -> Self {
        ChatstatsError::Io { source, path: None }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a malformed input error for a 1-based line number.
    pub fn malformed_input(line: usize, content: impl Into<String>) -> Self {
        ChatstatsError::MalformedInput {
            line,
            content: content.into(),
        }
    }

    /// Creates a not-found error for a contact.
    pub fn not_found(contact: impl Into<String>) -> Self {
        ChatstatsError::NotFound {
            contact: contact.into(),
        }
    }

    /// Creates a division-undefined error for the named ratio.
    pub fn division_undefined(quantity: &'static str) -> Self {
        ChatstatsError::DivisionUndefined { quantity }
    }

    /// Creates an encoding error with context.
    pub fn encoding(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ChatstatsError::Encoding {
            context: context.into(),
            source,
        }
    }

    /// Creates an I/O error tied to a file path.
    pub fn io_at(source: io::Error, path: impl Into<PathBuf>) -> Self {
        ChatstatsError::Io {
            source,
            path: Some(path.into()),
        }
    }

    /// Returns `true` if this is a malformed input error.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ChatstatsError::MalformedInput { .. })
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatstatsError::NotFound { .. })
    }

    /// Returns `true` if this is a division-undefined error.
    pub fn is_division_undefined(&self) -> bool {
        matches!(self, ChatstatsError::DivisionUndefined { .. })
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ChatstatsError::Encoding { .. })
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
