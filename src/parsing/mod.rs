//! Building blocks of the transcript parser.
//!
//! - [`header`] - header layouts, timestamp parsing, date-order detection
//! - [`classify`] - system-message predicates and body classification
//! - [`text`] - word/letter counting and emoji extraction
//!
//! These are used by [`TranscriptParser`](crate::TranscriptParser) and are
//! public so callers can classify single lines the same way.

pub mod classify;
pub mod header;
pub mod text;

pub use classify::{BodyKind, classify_body, is_encryption_notice, is_system_body};
pub use header::{
    HeaderLayout, RawHeader, detect_date_order, match_header, parse_timestamp, split_contact,
};
pub use text::{count_letters, count_words, extract_emojis, is_emoji};
