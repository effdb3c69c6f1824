//! Configuration types for the transcript parser and the summary report.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - how transcript lines are classified
//! - [`DateOrder`] - how ambiguous `D/M` vs `M/D` dates are read
//! - [`SystemRule`] - one entry of the pluggable system-message predicate set
//! - [`ReportConfig`] - how much of the frequency tables a report carries
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{DateOrder, ParseConfig, SystemRule};
//! use chatstats::TranscriptParser;
//!
//! let config = ParseConfig::new()
//!     .with_date_order(DateOrder::MonthFirst)
//!     .with_links_as_media(true)
//!     .with_system_rule(SystemRule::contains("pinned a message"));
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Order of the day and month components in slash/dot dates.
///
/// Exporters write dates in the device locale, so `03/07/2020` may be the
/// 3rd of July or the 7th of March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Decide once per transcript from the header dates.
    ///
    /// A first component above 12 means day-first, a second component
    /// above 12 means month-first. Undecidable transcripts are read day-first.
    #[default]
    Auto,
    /// `DD/MM/YY[YY]`
    DayFirst,
    /// `MM/DD/YY[YY]`
    MonthFirst,
}

/// A single system-message predicate.
///
/// Rules are evaluated case-insensitively against the message body (the
/// text after `Contact:`) and against the text before the first colon,
/// which is where a notice lands when its own text contains a colon. A
/// line matching any rule is dropped from the message sequence.
///
/// Phrases are stored lower-case. The constructors lower-case their input;
/// a variant built by hand goes through [`normalized`](Self::normalized),
/// which [`ParseConfig`] applies to every rule it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "phrase", rename_all = "snake_case")]
pub enum SystemRule {
    /// Body contains the phrase anywhere.
    Contains(String),
    /// Body starts with the phrase.
    StartsWith(String),
    /// Body ends with the phrase.
    EndsWith(String),
    /// Body equals the phrase.
    Equals(String),
}

impl SystemRule {
    /// Creates a [`SystemRule::Contains`] rule.
    pub fn contains(phrase: impl Into<String>) -> Self {
        SystemRule::Contains(phrase.into().to_lowercase())
    }

    /// Creates a [`SystemRule::StartsWith`] rule.
    pub fn starts_with(phrase: impl Into<String>) -> Self {
        SystemRule::StartsWith(phrase.into().to_lowercase())
    }

    /// Creates a [`SystemRule::EndsWith`] rule.
    pub fn ends_with(phrase: impl Into<String>) -> Self {
        SystemRule::EndsWith(phrase.into().to_lowercase())
    }

    /// Creates a [`SystemRule::Equals`] rule.
    pub fn equals(phrase: impl Into<String>) -> Self {
        SystemRule::Equals(phrase.into().to_lowercase())
    }

    /// Returns the rule with its phrase lower-cased.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            SystemRule::Contains(p) => SystemRule::Contains(p.to_lowercase()),
            SystemRule::StartsWith(p) => SystemRule::StartsWith(p.to_lowercase()),
            SystemRule::EndsWith(p) => SystemRule::EndsWith(p.to_lowercase()),
            SystemRule::Equals(p) => SystemRule::Equals(p.to_lowercase()),
        }
    }

    /// Returns `true` if the rule matches an already lower-cased body.
    ///
    /// The phrase is compared as stored.
    pub fn matches(&self, body_lower: &str) -> bool {
        match self {
            SystemRule::Contains(p) => body_lower.contains(p.as_str()),
            SystemRule::StartsWith(p) => body_lower.starts_with(p.as_str()),
            SystemRule::EndsWith(p) => body_lower.ends_with(p.as_str()),
            SystemRule::Equals(p) => body_lower == p,
        }
    }

    /// The rule set used by [`ParseConfig::default`].
    ///
    /// Covers call notices, group changes, admin and security notices.
    /// Membership notices without any colon never reach these rules.
    pub fn defaults() -> Vec<SystemRule> {
        vec![
            // Calls
            SystemRule::contains("missed voice call"),
            SystemRule::contains("missed video call"),
            SystemRule::contains("missed group voice call"),
            SystemRule::contains("missed group video call"),
            SystemRule::starts_with("voice call"),
            SystemRule::starts_with("video call"),
            SystemRule::starts_with("group voice call"),
            SystemRule::starts_with("group video call"),
            // Group changes
            SystemRule::contains("created group"),
            SystemRule::contains("changed the subject"),
            SystemRule::contains("changed this group's icon"),
            SystemRule::contains("changed the group description"),
            SystemRule::contains("changed the group settings"),
            SystemRule::contains("deleted this group's icon"),
            SystemRule::contains("changed their phone number"),
            SystemRule::contains("joined using this group's invite link"),
            SystemRule::contains("you were added"),
            SystemRule::contains("you were removed"),
            // Admin / security
            SystemRule::contains("end-to-end encrypted"),
            SystemRule::contains("security code changed"),
            SystemRule::contains("is now an admin"),
            SystemRule::contains("you're now an admin"),
            SystemRule::contains("turned on disappearing messages"),
            SystemRule::contains("turned off disappearing messages"),
        ]
    }
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParseConfig;
///
/// let config = ParseConfig::new()
///     .with_skip_encryption_notice(true)
///     .with_links_as_media(true);
/// assert!(config.links_as_media);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Day/month order for header dates (default: auto-detect)
    pub date_order: DateOrder,

    /// Drop a leading end-to-end encryption notice line (default: true)
    pub skip_encryption_notice: bool,

    /// Treat bodies carrying a link as media attachments (default: false)
    pub links_as_media: bool,

    /// System-message predicates; a matching line is dropped
    pub system_rules: Vec<SystemRule>,

    /// Bodies equal to one of these (case-insensitive) are media
    pub media_placeholders: Vec<String>,

    /// Bodies equal to one of these (case-insensitive) are deletion notices
    pub deleted_placeholders: Vec<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::Auto,
            skip_encryption_notice: true,
            links_as_media: false,
            system_rules: SystemRule::defaults(),
            media_placeholders: [
                "<Media omitted>",
                "image omitted",
                "video omitted",
                "audio omitted",
                "sticker omitted",
                "GIF omitted",
                "document omitted",
                "Contact card omitted",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            deleted_placeholders: ["This message was deleted", "You deleted this message"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets whether a leading encryption notice is dropped.
    #[must_use]
    pub fn with_skip_encryption_notice(mut self, skip: bool) -> Self {
        self.skip_encryption_notice = skip;
        self
    }

    /// Sets whether bodies carrying links count as media.
    #[must_use]
    pub fn with_links_as_media(mut self, enabled: bool) -> Self {
        self.links_as_media = enabled;
        self
    }

    /// Adds a system-message predicate.
    #[must_use]
    pub fn with_system_rule(mut self, rule: SystemRule) -> Self {
        self.system_rules.push(rule.normalized());
        self
    }

    /// Replaces the whole system-message predicate set.
    #[must_use]
    pub fn with_system_rules(mut self, rules: Vec<SystemRule>) -> Self {
        self.system_rules = rules.into_iter().map(SystemRule::normalized).collect();
        self
    }

    /// Lower-cases every system rule phrase.
    ///
    /// Needed for rules pushed onto `system_rules` directly or read from a
    /// serialized config; [`TranscriptParser`](crate::TranscriptParser)
    /// applies it to the config it is given.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.system_rules = self
            .system_rules
            .into_iter()
            .map(SystemRule::normalized)
            .collect();
        self
    }

    /// Adds a media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholders.push(placeholder.into());
        self
    }

    /// Adds a deletion-notice placeholder.
    #[must_use]
    pub fn with_deleted_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.deleted_placeholders.push(placeholder.into());
        self
    }
}

/// Configuration for [`ChatReport`](crate::core::ChatReport) generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Length of the top-N word and emoji slices (default: 20)
    pub top_n: usize,

    /// Include a summary for every contact (default: true)
    pub include_users: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            include_users: true,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the top-N slices.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets whether per-contact summaries are included.
    #[must_use]
    pub fn with_users(mut self, include: bool) -> Self {
        self.include_users = include;
        self
    }
}
