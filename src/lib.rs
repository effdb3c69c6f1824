//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into structured messages
//! and the statistics people usually want from them: who talks the most,
//! on which days and at what hours, which words and emoji come up.
//!
//! ## Overview
//!
//! The pipeline has two stages:
//! - **Parsing** ([`TranscriptParser`], [`build`]): raw export text to an
//!   ordered [`MessageSequence`]. Message boundaries are inferred line by
//!   line: header lines start messages, system notices are dropped, any
//!   other line continues the previous message.
//! - **Aggregation** ([`ChatAnalyzer`]): totals, histograms by date,
//!   weekday and hour, word and emoji tables, and per-contact summaries,
//!   all computed once at construction.
//!
//! Both dash (`29/09/2019, 12:56 am - Alice: hi`) and bracket
//! (`[29/09/19, 12:56:02 PM] Alice: hi`) exports are understood.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "Messages and calls are end-to-end encrypted.\n\
//!                29/09/2019, 12:56 am - Alice: hello\n\
//!                world\n\
//!                30/09/2019, 8:01 pm - Bob: <Media omitted>";
//!
//!     let analyzer = ChatAnalyzer::new(build(raw)?);
//!
//!     assert_eq!(analyzer.total_messages(), 2);
//!     assert_eq!(analyzer.per_user_summary("Bob")?.media, 1);
//!
//!     // Ratios with a zero denominator are errors, not zeros
//!     let bob = analyzer.per_user_summary("Bob")?;
//!     assert!(bob.words_per_message().unwrap_err().is_division_undefined());
//!
//!     let report = analyzer.report(&ReportConfig::default());
//!     assert_eq!(report.top_words[0].key, "hello");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`TranscriptParser`], [`build`], the line fold
//! - [`parsing`]: header layouts, body classification, text measurements
//! - [`message`]: [`Message`], [`MessageSequence`]
//! - [`core`]: [`ChatAnalyzer`], [`Histogram`](core::Histogram),
//!   [`UserStats`](core::UserStats), [`ChatReport`](core::ChatReport), output writers
//! - [`config`]: [`ParseConfig`](config::ParseConfig), [`ReportConfig`](config::ReportConfig)
//! - [`cli`]: CLI types (feature `cli`)
//! - [`error`]: Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`]: Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::ChatAnalyzer;
pub use error::{ChatstatsError, Result};
pub use message::{Message, MessageSequence};
pub use parser::{TranscriptParser, build};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Messages
    pub use crate::message::{Message, MessageSequence};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, build};

    // Configuration
    pub use crate::config::{DateOrder, ParseConfig, ReportConfig, SystemRule};

    // Aggregation
    pub use crate::core::{ChatAnalyzer, ChatReport, Histogram, Ratio, UserStats};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_frequencies_csv, write_timeline_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
