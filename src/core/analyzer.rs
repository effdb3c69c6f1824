//! Statistics aggregation over a finished message sequence.
//!
//! [`ChatAnalyzer`] builds every derived table in a single pass when it is
//! constructed; all queries afterwards are reads over those tables.
//!
//! # Example
//!
//! ```rust
//! use chatstats::{build, ChatAnalyzer};
//!
//! let raw = "29/09/2019, 12:56 am - Alice: hello 👋\n\
//!            29/09/2019, 1:02 am - Bob: <Media omitted>\n\
//!            30/09/2019, 9:15 am - Alice: Hello again!";
//!
//! let analyzer = ChatAnalyzer::new(build(raw)?);
//! assert_eq!(analyzer.total_messages(), 3);
//! assert_eq!(analyzer.total_days(), 1);
//! assert_eq!(analyzer.top_words(1), vec![("hello", 2)]);
//!
//! let alice = analyzer.per_user_summary("Alice")?;
//! assert_eq!(alice.messages, 2);
//! assert_eq!(alice.favorite_emoji, Some(("👋".to_string(), 1)));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

use super::histogram::Histogram;
use super::report::ChatReport;
use super::user::{Ratio, UserStats};
use crate::config::ReportConfig;
use crate::error::{ChatstatsError, Result};
use crate::message::{Message, MessageSequence};

/// Name used when none is given.
pub const DEFAULT_CHAT_NAME: &str = "WhatsApp Chat";

/// Characters stripped from both ends of a word before counting.
const WORD_TRIM: &[char] = &['(', ')', '.', '-', '*', '!', '?', '_', ':', '\''];

/// Derived statistics over one transcript.
#[derive(Debug, Clone)]
pub struct ChatAnalyzer {
    name: String,
    messages: MessageSequence,
    total_words: usize,
    total_letters: usize,
    total_media: usize,
    total_deleted: usize,
    total_emojis: usize,
    partition: HashMap<String, Vec<usize>>,
    contacts: Histogram<String>,
    dates: Histogram<NaiveDate>,
    weekdays: Histogram<Weekday>,
    hours: Histogram<u32>,
    words: Histogram<String>,
    emojis: Histogram<String>,
    emojis_by_contact: HashMap<String, Histogram<String>>,
    users: HashMap<String, UserStats>,
}

impl ChatAnalyzer {
    /// Aggregates a message sequence.
    pub fn new(messages: MessageSequence) -> Self {
        let mut analyzer = Self {
            name: DEFAULT_CHAT_NAME.to_string(),
            messages: MessageSequence::default(),
            total_words: 0,
            total_letters: 0,
            total_media: 0,
            total_deleted: 0,
            total_emojis: 0,
            partition: HashMap::new(),
            contacts: Histogram::new(),
            dates: Histogram::new(),
            weekdays: Histogram::new(),
            hours: Histogram::new(),
            words: Histogram::new(),
            emojis: Histogram::new(),
            emojis_by_contact: HashMap::new(),
            users: HashMap::new(),
        };

        for (index, msg) in messages.iter().enumerate() {
            analyzer.absorb(index, msg);
        }
        for (contact, stats) in &mut analyzer.users {
            stats.favorite_emoji = analyzer
                .emojis_by_contact
                .get(contact)
                .and_then(Histogram::most_frequent)
                .map(|(emoji, count)| (emoji.clone(), count));
        }
        analyzer.messages = messages;

        debug!(
            messages = analyzer.messages.len(),
            contacts = analyzer.contacts.len(),
            days = analyzer.dates.len(),
            distinct_words = analyzer.words.len(),
            distinct_emojis = analyzer.emojis.len(),
            "aggregated chat statistics"
        );
        analyzer
    }

    /// Sets the display name of the chat.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn absorb(&mut self, index: usize, msg: &Message) {
        let contact = msg.contact();

        self.total_words += msg.word_count();
        self.total_letters += msg.letter_count();
        self.total_emojis += msg.emojis().len();
        if msg.is_media() {
            self.total_media += 1;
        }
        if msg.is_deleted() {
            self.total_deleted += 1;
        }

        self.partition
            .entry(contact.to_string())
            .or_default()
            .push(index);
        self.contacts.add(contact.to_string());
        self.dates.add(msg.date());
        self.weekdays.add(msg.day_of_week());
        self.hours.add(msg.hour());
        self.words.extend(normalized_words(msg.body()));
        self.emojis.extend(msg.emojis().iter().cloned());
        self.emojis_by_contact
            .entry(contact.to_string())
            .or_default()
            .extend(msg.emojis().iter().cloned());

        let stats = self
            .users
            .entry(contact.to_string())
            .or_insert_with(|| UserStats {
                contact: contact.to_string(),
                ..UserStats::default()
            });
        if msg.is_media() {
            stats.media += 1;
        } else {
            stats.messages += 1;
        }
        if msg.is_deleted() {
            stats.deleted += 1;
        }
        stats.words += msg.word_count();
        stats.letters += msg.letter_count();
        stats.emoji_count += msg.emojis().len();
    }

    // =========================================================================
    // Sequence and totals
    // =========================================================================

    /// Returns the chat name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying message sequence.
    pub fn messages(&self) -> &MessageSequence {
        &self.messages
    }

    /// Number of messages, media and deletion notices included.
    pub fn total_messages(&self) -> usize {
        self.messages.len()
    }

    /// Sum of word counts over every body.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Sum of non-whitespace characters over every body.
    pub fn total_letters(&self) -> usize {
        self.total_letters
    }

    /// Number of media messages.
    pub fn total_media(&self) -> usize {
        self.total_media
    }

    /// Number of deletion notices.
    pub fn total_deleted(&self) -> usize {
        self.total_deleted
    }

    /// Number of emoji over every body, repeats included.
    pub fn total_emojis(&self) -> usize {
        self.total_emojis
    }

    // =========================================================================
    // Time span
    // =========================================================================

    /// Timestamp of the first message in sequence order.
    pub fn first_message_time(&self) -> Option<NaiveDateTime> {
        self.messages.first().map(Message::timestamp)
    }

    /// Timestamp of the last message in sequence order.
    pub fn last_message_time(&self) -> Option<NaiveDateTime> {
        self.messages.last().map(Message::timestamp)
    }

    /// Calendar days between the first and last message.
    ///
    /// Zero when every message falls on one day, or when there are none.
    pub fn total_days(&self) -> i64 {
        match (self.messages.first(), self.messages.last()) {
            (Some(first), Some(last)) => (last.date() - first.date()).num_days(),
            _ => 0,
        }
    }

    /// Messages per day over [`total_days`](Self::total_days).
    ///
    /// Fails with [`ChatstatsError::DivisionUndefined`] when the span is
    /// not positive.
    pub fn average_messages_per_day(&self) -> Result<Ratio> {
        let days = usize::try_from(self.total_days()).unwrap_or(0);
        Ratio::new(self.total_messages(), days, "average messages per day")
    }

    // =========================================================================
    // Histograms and modes
    // =========================================================================

    /// Messages per calendar day, in discovery order.
    pub fn date_histogram(&self) -> &Histogram<NaiveDate> {
        &self.dates
    }

    /// Messages per weekday, in discovery order.
    pub fn weekday_histogram(&self) -> &Histogram<Weekday> {
        &self.weekdays
    }

    /// Messages per hour of day, in discovery order.
    pub fn hour_histogram(&self) -> &Histogram<u32> {
        &self.hours
    }

    /// Date histogram in ascending date order, for charting.
    pub fn timeline(&self) -> Vec<(NaiveDate, usize)> {
        let mut timeline: Vec<_> = self.dates.iter().map(|(d, n)| (*d, n)).collect();
        timeline.sort_by_key(|(date, _)| *date);
        timeline
    }

    /// Busiest date; first-discovered on tie.
    pub fn most_active_date(&self) -> Option<(NaiveDate, usize)> {
        self.dates.most_frequent().map(|(d, n)| (*d, n))
    }

    /// Busiest weekday; first-discovered on tie.
    pub fn most_active_weekday(&self) -> Option<(Weekday, usize)> {
        self.weekdays.most_frequent().map(|(d, n)| (*d, n))
    }

    /// Busiest hour of day; first-discovered on tie.
    pub fn most_active_hour(&self) -> Option<(u32, usize)> {
        self.hours.most_frequent().map(|(h, n)| (*h, n))
    }

    /// Contact with the most messages; first-discovered on tie.
    pub fn most_frequent_contact(&self) -> Option<(&str, usize)> {
        self.contacts
            .most_frequent()
            .map(|(c, n)| (c.as_str(), n))
    }

    /// Contact and word count of the wordiest message; earliest on tie.
    pub fn longest_message_by_words(&self) -> Option<(&str, usize)> {
        let mut longest: Option<&Message> = None;
        for msg in &self.messages {
            if longest.is_none_or(|l| msg.word_count() > l.word_count()) {
                longest = Some(msg);
            }
        }
        longest.map(|m| (m.contact(), m.word_count()))
    }

    // =========================================================================
    // Contacts
    // =========================================================================

    /// Contacts in order of first appearance.
    pub fn contacts(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    /// Message count per contact, in order of first appearance.
    pub fn messages_per_contact(&self) -> &Histogram<String> {
        &self.contacts
    }

    /// Messages of one contact, in transcript order.
    pub fn messages_of(&self, contact: &str) -> Result<Vec<&Message>> {
        let indices = self
            .partition
            .get(contact)
            .ok_or_else(|| ChatstatsError::not_found(contact))?;
        Ok(indices
            .iter()
            .filter_map(|&i| self.messages.get(i))
            .collect())
    }

    /// Counts for one contact.
    pub fn per_user_summary(&self, contact: &str) -> Result<&UserStats> {
        self.users
            .get(contact)
            .ok_or_else(|| ChatstatsError::not_found(contact))
    }

    // =========================================================================
    // Word and emoji tables
    // =========================================================================

    /// Normalized word to occurrence count, over every body.
    pub fn word_frequencies(&self) -> &Histogram<String> {
        &self.words
    }

    /// Emoji to occurrence count, over every body.
    pub fn emoji_frequencies(&self) -> &Histogram<String> {
        &self.emojis
    }

    /// Emoji to occurrence count for one contact.
    pub fn emoji_frequencies_of(&self, contact: &str) -> Result<&Histogram<String>> {
        self.emojis_by_contact
            .get(contact)
            .ok_or_else(|| ChatstatsError::not_found(contact))
    }

    /// The `n` most used words, ties in first-encountered order.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        self.words
            .top(n)
            .into_iter()
            .map(|(w, c)| (w.as_str(), c))
            .collect()
    }

    /// The `n` most used emoji, ties in first-encountered order.
    pub fn top_emojis(&self, n: usize) -> Vec<(&str, usize)> {
        self.emojis
            .top(n)
            .into_iter()
            .map(|(e, c)| (e.as_str(), c))
            .collect()
    }

    /// Gathers the summary consumed by renderers.
    pub fn report(&self, config: &ReportConfig) -> ChatReport {
        ChatReport::from_analyzer(self, config)
    }
}

/// Lower-cased tokens of `body` with outer punctuation removed.
///
/// Tokens that are punctuation only are skipped.
///
/// ```rust
/// use chatstats::core::normalized_words;
///
/// let words: Vec<_> = normalized_words("Hello, (World)! ...").collect();
/// assert_eq!(words, ["hello,", "world"]);
/// ```
pub fn normalized_words(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split_whitespace().filter_map(|token| {
        let word = token.to_lowercase();
        let word = word.trim_matches(WORD_TRIM);
        (!word.is_empty()).then(|| word.to_string())
    })
}

/// Derives a chat name from an export file name.
///
/// Exporters name archives `WhatsApp Chat - <name>.zip` (or `with <name>`
/// for the plain-text export). Returns `None` for other names.
///
/// ```rust
/// use chatstats::core::chat_name_from_export;
///
/// assert_eq!(
///     chat_name_from_export("uploads/WhatsApp Chat - Trip 2020.zip"),
///     Some("Trip 2020".to_string()),
/// );
/// assert_eq!(chat_name_from_export("notes.txt"), None);
/// ```
pub fn chat_name_from_export(file_name: &str) -> Option<String> {
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    let name = stem
        .strip_prefix("WhatsApp Chat - ")
        .or_else(|| stem.strip_prefix("WhatsApp Chat with "))?
        .trim();
    (!name.is_empty()).then(|| name.to_string())
}
