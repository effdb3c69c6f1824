//! Message records produced by the transcript parser.
//!
//! This module provides [`Message`], one user message from a chat export, and
//! [`MessageSequence`], the ordered collection the parser returns.
//!
//! # Overview
//!
//! A message carries:
//! - **Header fields**: `contact` and `timestamp`, plus the grouping keys
//!   derived from the timestamp (`date`, `day_of_week`, `hour`)
//! - **Body fields**: `body`, `is_media`, `is_deleted`
//! - **Measurements**: `word_count`, `letter_count`, `emojis`
//!
//! Measurements are always recomputed from the current body, including
//! after continuation lines are merged, so fields are private and exposed
//! through accessors.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2019, 9, 29).unwrap().and_hms_opt(0, 56, 0).unwrap();
//! let msg = Message::text("Alice", ts, "hello 👋");
//!
//! assert_eq!(msg.contact(), "Alice");
//! assert_eq!(msg.word_count(), 2);
//! assert_eq!(msg.emojis(), ["👋"]);
//! assert_eq!(msg.day_name(), "Sunday");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::parsing::text::{count_letters, count_words, extract_emojis};

/// One user message from a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `contact` | `String` | Display name from the header line |
/// | `timestamp` | `NaiveDateTime` | Header time, minute or second resolution |
/// | `date` | `NaiveDate` | `timestamp` truncated to the calendar day |
/// | `day_of_week` | `Weekday` | Derived from `date` |
/// | `hour` | `u32` | 0-23, derived from `timestamp` |
/// | `is_media` | `bool` | Omitted or link-embedded attachment |
/// | `is_deleted` | `bool` | Deletion notice |
/// | `body` | `String` | Text, empty for media and deletion notices |
/// | `word_count` | `usize` | Whitespace-delimited tokens in `body` |
/// | `letter_count` | `usize` | Non-whitespace characters in `body` |
/// | `emojis` | `Vec<String>` | Emoji in `body`, in order, duplicates kept |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    contact: String,
    timestamp: NaiveDateTime,
    date: NaiveDate,
    day_of_week: Weekday,
    hour: u32,
    is_media: bool,
    is_deleted: bool,
    body: String,
    word_count: usize,
    letter_count: usize,
    emojis: Vec<String>,
}

impl Message {
    /// Creates a text message; measurements are computed from `body`.
    pub fn text(
        contact: impl Into<String>,
        timestamp: NaiveDateTime,
        body: impl Into<String>,
    ) -> Self {
        let mut msg = Self {
            contact: contact.into(),
            timestamp,
            date: timestamp.date(),
            day_of_week: timestamp.weekday(),
            hour: timestamp.hour(),
            is_media: false,
            is_deleted: false,
            body: body.into(),
            word_count: 0,
            letter_count: 0,
            emojis: Vec::new(),
        };
        msg.recount();
        msg
    }

    /// Creates a media message with an empty body.
    pub fn media(contact: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let mut msg = Self::text(contact, timestamp, "");
        msg.is_media = true;
        msg
    }

    /// Creates a deletion notice with an empty body.
    pub fn deleted(contact: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let mut msg = Self::text(contact, timestamp, "");
        msg.is_deleted = true;
        msg
    }

    /// Appends a continuation line to the body, separated by a newline.
    pub(crate) fn append_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
        self.recount();
    }

    fn recount(&mut self) {
        self.word_count = count_words(&self.body);
        self.letter_count = count_letters(&self.body);
        self.emojis = extract_emojis(&self.body);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the contact name.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the header timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar day of the message.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the day of the week.
    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// Returns the full English day name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }

    /// Returns the hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns `true` for omitted or link-embedded attachments.
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Returns `true` for deletion notices.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of non-whitespace characters in the body.
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// Returns the emoji found in the body.
    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Ordered messages of one transcript, in transcript order.
///
/// The sequence is never re-sorted: insertion order is the order the
/// messages appear in the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageSequence {
    messages: Vec<Message>,
}

impl MessageSequence {
    /// Creates a sequence from messages already in transcript order.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the message at `index`.
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Returns the first message.
    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    /// Returns the last message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Iterates over messages in transcript order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns the messages as a slice.
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the sequence, returning the messages.
    pub fn into_vec(self) -> Vec<Message> {
        self.messages
    }
}

impl From<Vec<Message>> for MessageSequence {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl IntoIterator for MessageSequence {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageSequence {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_text_message_fields() {
        let msg = Message::text("Alice", ts(2020, 7, 3, 16, 32), "hello there 🎉");
        assert_eq!(msg.contact(), "Alice");
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
        assert_eq!(msg.day_of_week(), Weekday::Fri);
        assert_eq!(msg.day_name(), "Friday");
        assert_eq!(msg.hour(), 16);
        assert!(!msg.is_media());
        assert!(!msg.is_deleted());
        assert_eq!(msg.word_count(), 3);
        assert_eq!(msg.letter_count(), 11);
        assert_eq!(msg.emojis(), ["🎉"]);
    }

    #[test]
    fn test_date_ignores_time_of_day() {
        let morning = Message::text("A", ts(2020, 1, 1, 0, 1), "x");
        let night = Message::text("B", ts(2020, 1, 1, 23, 59), "y");
        assert_eq!(morning.date(), night.date());
        assert_ne!(morning.timestamp(), night.timestamp());
    }

    #[test]
    fn test_media_and_deleted_have_empty_body() {
        let media = Message::media("Alice", ts(2020, 1, 1, 10, 0));
        assert!(media.is_media());
        assert_eq!(media.body(), "");
        assert_eq!(media.word_count(), 0);
        assert_eq!(media.letter_count(), 0);

        let deleted = Message::deleted("Bob", ts(2020, 1, 1, 10, 0));
        assert!(deleted.is_deleted());
        assert!(!deleted.is_media());
        assert_eq!(deleted.body(), "");
    }

    #[test]
    fn test_append_line_recounts() {
        let mut msg = Message::text("Alice", ts(2020, 1, 1, 10, 0), "hello");
        msg.append_line("big world 😂");

        assert_eq!(msg.body(), "hello\nbig world 😂");
        assert_eq!(msg.word_count(), 4);
        assert_eq!(msg.letter_count(), 14);
        assert_eq!(msg.emojis(), ["😂"]);
    }

    #[test]
    fn test_append_empty_line_keeps_paragraphs() {
        let mut msg = Message::text("Alice", ts(2020, 1, 1, 10, 0), "one");
        msg.append_line("");
        msg.append_line("two");
        assert_eq!(msg.body(), "one\n\ntwo");
        assert_eq!(msg.word_count(), 2);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_sequence_accessors() {
        let seq = MessageSequence::from(vec![
            Message::text("A", ts(2020, 1, 1, 10, 0), "first"),
            Message::text("B", ts(2020, 1, 2, 10, 0), "second"),
        ]);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());
        assert_eq!(seq.first().unwrap().body(), "first");
        assert_eq!(seq.last().unwrap().body(), "second");
        assert_eq!(seq.iter().count(), 2);
        assert_eq!((&seq).into_iter().count(), 2);
        assert_eq!(seq.into_vec().len(), 2);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::text("Alice", ts(2020, 1, 1, 10, 0), "hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"contact\":\"Alice\""));
        assert!(json.contains("\"word_count\":1"));
        assert!(json.contains("\"date\":\"2020-01-01\""));
    }
}
