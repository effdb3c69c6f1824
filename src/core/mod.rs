//! Statistics aggregation for chatstats.
//!
//! This module contains:
//! - [`analyzer`] - [`ChatAnalyzer`], all derived tables and queries
//! - [`histogram`] - [`Histogram`], the insertion-ordered counting table
//! - [`user`] - [`UserStats`] and exact [`Ratio`]s
//! - [`report`] - [`ChatReport`], the flattened summary for renderers
//! - [`output`] - Format writers (JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::ChatAnalyzer;
//! use chatstats::config::ReportConfig;
//!
//! let analyzer = ChatAnalyzer::new(chatstats::build("01/01/2020, 10:00 - A: hi")?);
//! let report = analyzer.report(&ReportConfig::default());
//! assert_eq!(report.total_messages, 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod analyzer;
pub mod histogram;
pub mod output;
pub mod report;
pub mod user;

pub use analyzer::{ChatAnalyzer, DEFAULT_CHAT_NAME, chat_name_from_export, normalized_words};
pub use histogram::Histogram;
pub use report::{ChatReport, FrequencyEntry, UserReport};
pub use user::{Ratio, UserStats};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_frequencies_csv, write_timeline_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
