//! Flattened summary of a chat, ready for rendering.

use serde::Serialize;

use super::analyzer::ChatAnalyzer;
use super::user::Ratio;
use crate::config::ReportConfig;
use crate::message::weekday_name;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// Rendered key: a word, an emoji, a date, a weekday or an hour
    pub key: String,
    pub count: usize,
}

impl FrequencyEntry {
    fn new(key: impl ToString, count: usize) -> Self {
        Self {
            key: key.to_string(),
            count,
        }
    }
}

/// Per-contact part of a [`ChatReport`].
///
/// Undefined ratios are `None` (`null` in JSON), never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub contact: String,
    pub messages: usize,
    pub media: usize,
    pub deleted: usize,
    pub words: usize,
    pub letters: usize,
    pub emoji_count: usize,
    pub favorite_emoji: Option<FrequencyEntry>,
    pub words_per_message: Option<Ratio>,
    pub letters_per_word: Option<Ratio>,
}

/// Scalar fields, top-N tables and timeline of one chat.
///
/// Built by [`ChatAnalyzer::report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub name: String,
    pub total_messages: usize,
    pub total_words: usize,
    pub total_letters: usize,
    pub total_media: usize,
    pub total_deleted: usize,
    pub total_emojis: usize,
    /// `YYYY-MM-DD HH:MM:SS`
    pub first_message: Option<String>,
    pub last_message: Option<String>,
    pub total_days: i64,
    pub average_messages_per_day: Option<Ratio>,
    pub most_active_date: Option<FrequencyEntry>,
    pub most_active_weekday: Option<FrequencyEntry>,
    pub most_active_hour: Option<FrequencyEntry>,
    pub most_frequent_contact: Option<FrequencyEntry>,
    pub longest_message: Option<FrequencyEntry>,
    pub top_words: Vec<FrequencyEntry>,
    pub top_emojis: Vec<FrequencyEntry>,
    /// Messages per date, ascending
    pub timeline: Vec<FrequencyEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserReport>,
}

impl ChatReport {
    pub(crate) fn from_analyzer(analyzer: &ChatAnalyzer, config: &ReportConfig) -> Self {
        let users = if config.include_users {
            analyzer
                .contacts()
                .filter_map(|contact| analyzer.per_user_summary(contact).ok())
                .map(|stats| UserReport {
                    contact: stats.contact.clone(),
                    messages: stats.messages,
                    media: stats.media,
                    deleted: stats.deleted,
                    words: stats.words,
                    letters: stats.letters,
                    emoji_count: stats.emoji_count,
                    favorite_emoji: stats
                        .favorite_emoji
                        .as_ref()
                        .map(|(emoji, count)| FrequencyEntry::new(emoji, *count)),
                    words_per_message: stats.words_per_message().ok(),
                    letters_per_word: stats.letters_per_word().ok(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let format_time = |ts: chrono::NaiveDateTime| ts.format("%Y-%m-%d %H:%M:%S").to_string();

        Self {
            name: analyzer.name().to_string(),
            total_messages: analyzer.total_messages(),
            total_words: analyzer.total_words(),
            total_letters: analyzer.total_letters(),
            total_media: analyzer.total_media(),
            total_deleted: analyzer.total_deleted(),
            total_emojis: analyzer.total_emojis(),
            first_message: analyzer.first_message_time().map(format_time),
            last_message: analyzer.last_message_time().map(format_time),
            total_days: analyzer.total_days(),
            average_messages_per_day: analyzer.average_messages_per_day().ok(),
            most_active_date: analyzer
                .most_active_date()
                .map(|(d, n)| FrequencyEntry::new(d, n)),
            most_active_weekday: analyzer
                .most_active_weekday()
                .map(|(d, n)| FrequencyEntry::new(weekday_name(d), n)),
            most_active_hour: analyzer
                .most_active_hour()
                .map(|(h, n)| FrequencyEntry::new(h, n)),
            most_frequent_contact: analyzer
                .most_frequent_contact()
                .map(|(c, n)| FrequencyEntry::new(c, n)),
            longest_message: analyzer
                .longest_message_by_words()
                .map(|(c, n)| FrequencyEntry::new(c, n)),
            top_words: to_entries(analyzer.top_words(config.top_n)),
            top_emojis: to_entries(analyzer.top_emojis(config.top_n)),
            timeline: analyzer
                .timeline()
                .into_iter()
                .map(|(d, n)| FrequencyEntry::new(d, n))
                .collect(),
            users,
        }
    }
}

fn to_entries(rows: Vec<(&str, usize)>) -> Vec<FrequencyEntry> {
    rows.into_iter()
        .map(|(key, count)| FrequencyEntry::new(key, count))
        .collect()
}
