//! Transcript parser: raw export text to an ordered [`MessageSequence`].
//!
//! # Processing model
//!
//! Lines are folded one at a time through a [`MessageBuilder`]:
//!
//! 1. A line matching a header layout with a valid timestamp is split into
//!    contact and body.
//!    - No contact separator, or a body matching a system rule: the line is
//!      dropped and the previously open message stays the continuation target.
//!    - Otherwise the body is classified (text / media / deleted) and a new
//!      message is appended and becomes the open message.
//! 2. Any other line is continuation text for the open message. With no open
//!    message the transcript is malformed.
//!
//! The fold carries the open-message index explicitly, so continuation
//! handling depends only on the previous line's outcome.
//!
//! # Example
//!
//! ```rust
//! use chatstats::TranscriptParser;
//!
//! let raw = "Messages and calls are end-to-end encrypted.\n\
//!            29/09/2019, 12:56 am - Alice: hello\n\
//!            world";
//!
//! let messages = TranscriptParser::new().parse_str(raw)?;
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages.as_slice()[0].body(), "hello\nworld");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::config::{DateOrder, ParseConfig};
use crate::error::{ChatstatsError, Result};
use crate::message::{Message, MessageSequence};
use crate::parsing::{
    BodyKind, classify_body, detect_date_order, is_encryption_notice, is_system_body,
    match_header, parse_timestamp, split_contact,
};

/// Parses a transcript with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(raw_text)`.
pub fn build(raw_text: &str) -> Result<MessageSequence> {
    TranscriptParser::new().parse_str(raw_text)
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::TranscriptParser;
/// use chatstats::config::{DateOrder, ParseConfig};
///
/// let parser = TranscriptParser::with_config(
///     ParseConfig::new().with_date_order(DateOrder::MonthFirst),
/// );
/// let messages = parser.parse_file("WhatsApp Chat with Alice.txt".as_ref())?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParseConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    ///
    /// System rule phrases are lower-cased here once.
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses a transcript that is already decoded.
    pub fn parse_str(&self, raw_text: &str) -> Result<MessageSequence> {
        let raw_text = raw_text.strip_prefix('\u{FEFF}').unwrap_or(raw_text);

        let mut lines = raw_text.lines().enumerate().peekable();
        if self.config.skip_encryption_notice
            && lines.peek().is_some_and(|(_, l)| is_encryption_notice(l))
        {
            lines.next();
        }

        let date_order = self.resolve_date_order(raw_text);
        let mut builder = MessageBuilder::new(&self.config, date_order);
        for (index, line) in lines {
            builder.feed(index + 1, line)?;
        }

        let sequence = builder.finish();
        debug!(
            messages = sequence.len(),
            ?date_order,
            "built message sequence"
        );
        Ok(sequence)
    }

    /// Decodes UTF-8 bytes and parses them.
    ///
    /// Invalid UTF-8 fails with [`ChatstatsError::Encoding`]; no partial
    /// result is returned.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<MessageSequence> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| ChatstatsError::encoding("transcript", e))?;
        self.parse_str(text)
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<MessageSequence> {
        let bytes = fs::read(path).map_err(|e| ChatstatsError::io_at(e, path))?;
        self.parse_bytes(&bytes)
    }

    fn resolve_date_order(&self, raw_text: &str) -> DateOrder {
        match self.config.date_order {
            DateOrder::Auto => detect_date_order(raw_text.lines()).unwrap_or(DateOrder::DayFirst),
            order => order,
        }
    }
}

/// Outcome of classifying a single transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new message.
    Header {
        /// Display name
        contact: &'a str,
        /// Parsed header timestamp
        timestamp: NaiveDateTime,
        /// Body text after the contact separator
        body: &'a str,
    },
    /// Platform notice; never becomes a message.
    System,
    /// Extends the open message.
    Continuation,
}

/// Classifies a single line under a resolved date order.
///
/// `config` is expected to be [normalized](ParseConfig::normalized).
pub fn classify_line<'a>(line: &'a str, config: &ParseConfig, order: DateOrder) -> LineKind<'a> {
    let Some(header) = match_header(line) else {
        return LineKind::Continuation;
    };

    let Some(timestamp) = parse_timestamp(header.date, header.time, order) else {
        debug!(date = header.date, time = header.time, "header with invalid timestamp read as text");
        return LineKind::Continuation;
    };

    let Some((contact, body)) = split_contact(header.rest) else {
        return LineKind::System;
    };

    // a notice whose own text has a colon is split inside the notice
    if is_system_body(body, &config.system_rules)
        || is_system_body(contact, &config.system_rules)
    {
        return LineKind::System;
    }

    LineKind::Header {
        contact,
        timestamp,
        body,
    }
}

/// Line-by-line accumulator behind [`TranscriptParser`].
///
/// Holds the messages built so far and the index of the open message that
/// receives continuation lines.
#[derive(Debug)]
pub struct MessageBuilder<'c> {
    config: &'c ParseConfig,
    date_order: DateOrder,
    messages: Vec<Message>,
    open: Option<usize>,
    dropped: usize,
}

impl<'c> MessageBuilder<'c> {
    /// Creates an empty builder.
    pub fn new(config: &'c ParseConfig, date_order: DateOrder) -> Self {
        Self {
            config,
            date_order,
            messages: Vec::new(),
            open: None,
            dropped: 0,
        }
    }

    /// Feeds one line; `line_number` is 1-based and used for errors.
    pub fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        match classify_line(line, self.config, self.date_order) {
            LineKind::Header {
                contact,
                timestamp,
                body,
            } => {
                let msg = match classify_body(body, self.config) {
                    BodyKind::Media => Message::media(contact, timestamp),
                    BodyKind::Deleted => Message::deleted(contact, timestamp),
                    BodyKind::Text => Message::text(contact, timestamp, body),
                };
                self.messages.push(msg);
                self.open = Some(self.messages.len() - 1);
            }
            LineKind::System => {
                self.dropped += 1;
                debug!(line = line_number, "dropped system message");
            }
            LineKind::Continuation => match self.open {
                Some(index) => {
                    trace!(line = line_number, open = index, "merged continuation line");
                    self.messages[index].append_line(line);
                }
                None if line.trim().is_empty() => {}
                None => return Err(ChatstatsError::malformed_input(line_number, line)),
            },
        }
        Ok(())
    }

    /// Returns the number of system lines dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Finishes the fold.
    pub fn finish(self) -> MessageSequence {
        if self.dropped > 0 {
            debug!(dropped = self.dropped, "system messages excluded");
        }
        MessageSequence::new(self.messages)
    }
}
