//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - How the summary is printed
//! - [`DateOrderArg`] - CLI spelling of [`DateOrder`]
//! - [`setup_logging`] - stderr `tracing` subscriber for the binary
//!
//! # Example
//!
//! ```rust
//! use chatstats::cli::{Args, OutputFormat};
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatstats", "chat.txt", "-f", "json", "-n", "5"]).unwrap();
//! assert_eq!(args.format, OutputFormat::Json);
//! assert_eq!(args.report_config().top_n, 5);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{DateOrder, ParseConfig, ReportConfig};

/// Statistics for WhatsApp chat exports: totals, activity by day and hour,
/// top words and emoji, and a summary per contact.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats \"WhatsApp Chat with Alice.txt\"
    chatstats chat.txt -f json -n 10 > report.json
    chatstats chat.txt --date-order month-first --user Bob
    chatstats chat.txt --timeline-csv timeline.csv --words-csv words.csv")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of top words and emoji to show
    #[arg(short = 'n', long = "top", default_value_t = 20, value_name = "N")]
    pub top: usize,

    /// Chat name (default: derived from the file name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Day/month order of header dates
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Count messages carrying links as media
    #[arg(long)]
    pub links_as_media: bool,

    /// Write messages per date to a CSV file
    #[arg(long, value_name = "PATH")]
    pub timeline_csv: Option<PathBuf>,

    /// Write the full word frequency table to a CSV file
    #[arg(long, value_name = "PATH")]
    pub words_csv: Option<PathBuf>,

    /// Only print the summary of one contact
    #[arg(long, value_name = "CONTACT")]
    pub user: Option<String>,

    /// Log filter for stderr diagnostics (e.g. debug, chatstats=trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new()
            .with_date_order(self.date_order.into())
            .with_links_as_media(self.links_as_media)
    }

    /// Report configuration selected by the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new().with_top_n(self.top)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// Pretty JSON report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Day/month order as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// Detect from the transcript
    #[default]
    Auto,
    /// DD/MM/YY
    #[value(alias = "dmy")]
    DayFirst,
    /// MM/DD/YY
    #[value(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> DateOrder {
        match arg {
            DateOrderArg::Auto => DateOrder::Auto,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `level` takes precedence over `RUST_LOG`; with neither, only warnings
/// and errors are shown. An unparseable directive falls back to `warn`.
pub fn setup_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive.to_lowercase())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
