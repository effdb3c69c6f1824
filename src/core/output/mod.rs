//! Output format writers.
//!
//! This module provides writers for the aggregated results:
//! - [`write_json`] / [`to_json`] - pretty JSON of a [`ChatReport`](crate::core::ChatReport) - requires `json-output` feature
//! - [`write_timeline_csv`] / [`write_frequencies_csv`] / [`to_csv`] - `;`-delimited tables for charting - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::ReportConfig;
//! use chatstats::core::output::{write_json, write_timeline_csv};
//! use chatstats::{ChatAnalyzer, TranscriptParser};
//!
//! let messages = TranscriptParser::new().parse_file("chat.txt".as_ref())?;
//! let report = ChatAnalyzer::new(messages).report(&ReportConfig::default());
//!
//! write_json(&report, "report.json")?;
//! write_timeline_csv(&report.timeline, "timeline.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_frequencies_csv, write_timeline_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
