//! Line and body classification.
//!
//! Once a header has been split into contact and body, the body decides
//! what happens next: a system notice is dropped, a media or deletion
//! placeholder becomes a flag with an empty body, anything else is text.

use crate::config::{ParseConfig, SystemRule};

/// Phrase that marks the end-to-end encryption notice.
const ENCRYPTION_NOTICE: &str = "end-to-end encrypt";

/// Link markers recognised when links count as media.
const LINK_MARKERS: &[&str] = &["http://", "https://", "www."];

/// What a header body turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Regular user text, kept verbatim.
    Text,
    /// An omitted or embedded attachment.
    Media,
    /// A deletion notice.
    Deleted,
}

/// Returns `true` if `line` is the end-to-end encryption notice.
pub fn is_encryption_notice(line: &str) -> bool {
    line.to_lowercase().contains(ENCRYPTION_NOTICE)
}

/// Returns `true` if the text matches any system-message rule.
///
/// Used on the body and on the contact half of a header line.
pub fn is_system_body(body: &str, rules: &[SystemRule]) -> bool {
    let lower = body.trim().trim_start_matches('\u{200E}').to_lowercase();
    rules.iter().any(|rule| rule.matches(&lower))
}

/// Classifies a (non-system) message body.
///
/// Media is checked before deletion.
pub fn classify_body(body: &str, config: &ParseConfig) -> BodyKind {
    let lower = body.trim().trim_start_matches('\u{200E}').to_lowercase();

    if is_media(&lower, config) {
        BodyKind::Media
    } else if is_deleted(&lower, config) {
        BodyKind::Deleted
    } else {
        BodyKind::Text
    }
}

fn is_media(lower: &str, config: &ParseConfig) -> bool {
    if config
        .media_placeholders
        .iter()
        .any(|p| lower == p.to_lowercase())
    {
        return true;
    }

    // "<attached: 00000012-PHOTO-2020-07-03.jpg>" and "report.pdf • 3 pages document omitted"
    if lower.starts_with("<attached:") || lower.ends_with("document omitted") {
        return true;
    }

    config.links_as_media && LINK_MARKERS.iter().any(|m| lower.contains(m))
}

fn is_deleted(lower: &str, config: &ParseConfig) -> bool {
    let lower = lower.trim_end_matches('.');
    config
        .deleted_placeholders
        .iter()
        .any(|p| lower == p.to_lowercase().trim_end_matches('.'))
}
