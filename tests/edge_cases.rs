//! Edge case tests for chatstats
//!
//! These tests cover the ambiguous corners of line-heuristic parsing and
//! the boundary conditions of the aggregator.

use chatstats::config::{ParseConfig, ReportConfig};
use chatstats::{ChatAnalyzer, ChatstatsError, MessageSequence, TranscriptParser, build};

// =========================================================================
// Malformed and empty input
// =========================================================================

#[test]
fn test_empty_input() {
    let messages = build("").unwrap();
    assert!(messages.is_empty());

    let a = ChatAnalyzer::new(messages);
    assert_eq!(a.total_messages(), 0);
    assert!(a.most_frequent_contact().is_none());
    assert!(a.top_words(5).is_empty());
}

#[test]
fn test_only_encryption_notice() {
    let messages =
        build("29/09/2019, 12:56 am - Messages to this group are now secured with end-to-end encryption.")
            .unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_leading_continuation_is_malformed() {
    let err = build("just some text\n29/09/2019, 12:56 am - Alice: hi").unwrap_err();
    match err {
        ChatstatsError::MalformedInput { line, ref content } => {
            assert_eq!(line, 1);
            assert_eq!(content, "just some text");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_continuation_after_only_system_lines_is_malformed() {
    let raw = "29/09/2019, 12:56 am - Alice created group \"Trip\"\n\
               stray text";
    let err = build(raw).unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_notice_kept_when_not_skipped() {
    let raw = "29/09/2019, 12:56 am - Messages to this group are now secured with end-to-end encryption.\n\
               29/09/2019, 12:57 am - Alice: hi";
    let parser = TranscriptParser::with_config(ParseConfig::new().with_skip_encryption_notice(false));
    // the notice has no contact separator, so it is still a system line
    assert_eq!(parser.parse_str(raw).unwrap().len(), 1);
}

#[test]
fn test_invalid_utf8() {
    let mut bytes = b"29/09/2019, 12:56 am - Alice: ".to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28]);
    let err = TranscriptParser::new().parse_bytes(&bytes).unwrap_err();
    assert!(err.is_encoding());
}

#[test]
fn test_crlf_line_endings() {
    let raw = "29/09/2019, 12:56 am - Alice: hello\r\nworld\r\n29/09/2019, 12:57 am - Bob: hey\r\n";
    let messages = build(raw).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.first().unwrap().body(), "hello\nworld");
    assert_eq!(messages.last().unwrap().body(), "hey");
}

#[test]
fn test_bom_prefixed_transcript() {
    let raw = "\u{FEFF}29/09/2019, 12:56 am - Alice: hello";
    assert_eq!(build(raw).unwrap().first().unwrap().contact(), "Alice");
}

// =========================================================================
// Continuation handling
// =========================================================================

#[test]
fn test_blank_lines_inside_body() {
    let raw = "29/09/2019, 12:56 am - Alice: first\n\nsecond\n29/09/2019, 12:57 am - Bob: hey";
    let messages = build(raw).unwrap();
    assert_eq!(messages.first().unwrap().body(), "first\n\nsecond");
    assert_eq!(messages.first().unwrap().word_count(), 2);
}

#[test]
fn test_continuation_after_system_line_targets_previous_message() {
    let raw = "29/09/2019, 12:56 am - Alice: hello\n\
               29/09/2019, 12:57 am - Bob: Missed voice call\n\
               still alice";
    let messages = build(raw).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.first().unwrap().body(), "hello\nstill alice");
}

#[test]
fn test_group_notices_containing_colons_are_dropped() {
    let raw = "29/09/2019, 12:56 am - Alice: hi\n\
               29/09/2019, 12:57 am - Alice changed the subject from \"Trip\" to \"Trip: 2020\"\n\
               29/09/2019, 12:58 am - Bob changed the group description to: new rules";
    let a = ChatAnalyzer::new(build(raw).unwrap());

    assert_eq!(a.total_messages(), 1);
    assert_eq!(a.contacts().collect::<Vec<_>>(), ["Alice"]);
    assert_eq!(a.messages().first().unwrap().body(), "hi");
    assert_eq!(a.word_frequencies().get("rules"), 0);
}

#[test]
fn test_hand_built_rule_is_case_insensitive() {
    use chatstats::config::SystemRule;

    let mut config = ParseConfig::new();
    config.system_rules.push(SystemRule::Contains("Pinned A Message".to_string()));
    let parser = TranscriptParser::with_config(config);

    let raw = "01/01/2020, 10:00 - Alice: hi\n01/01/2020, 10:01 - Alice: pinned a message";
    assert_eq!(parser.parse_str(raw).unwrap().len(), 1);
}

#[test]
fn test_continuation_of_media_message() {
    let raw = "29/09/2019, 12:56 am - Alice: <Media omitted>\ncaption text";
    let msg = build(raw).unwrap().into_vec().remove(0);
    assert!(msg.is_media());
    assert_eq!(msg.body(), "\ncaption text");
    assert_eq!(msg.word_count(), 2);
}

#[test]
fn test_timestamp_like_body_line_starts_new_message() {
    // accepted limitation: a body line that looks like a header is a header
    let raw = "29/09/2019, 12:56 am - Alice: the log says\n\
               29/09/2019, 12:57 am - server: restarted";
    let messages = build(raw).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.last().unwrap().contact(), "server");
}

#[test]
fn test_time_without_header_shape_is_continuation() {
    let raw = "29/09/2019, 12:56 am - Alice: plan\n10:30 - meet: at the station";
    let messages = build(raw).unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages.first().unwrap().body().ends_with("at the station"));
}

// =========================================================================
// Contacts and bodies
// =========================================================================

#[test]
fn test_unicode_contacts() {
    let raw = "29/09/2019, 12:56 am - Иван: Привет мир\n\
               29/09/2019, 12:57 am - 村上: こんにちは\n\
               29/09/2019, 12:58 am - +44 7700 900123: hi";
    let a = ChatAnalyzer::new(build(raw).unwrap());
    assert_eq!(a.contacts().collect::<Vec<_>>(), ["Иван", "村上", "+44 7700 900123"]);
    assert_eq!(a.per_user_summary("Иван").unwrap().letters, 9);
}

#[test]
fn test_colon_in_body_splits_at_first_colon() {
    let msg = build("29/09/2019, 12:56 am - Alice: note: bring 2:1 adapter")
        .unwrap()
        .into_vec()
        .remove(0);
    assert_eq!(msg.contact(), "Alice");
    assert_eq!(msg.body(), "note: bring 2:1 adapter");
}

#[test]
fn test_empty_body() {
    let msg = build("29/09/2019, 12:56 am - Alice:")
        .unwrap()
        .into_vec()
        .remove(0);
    assert_eq!(msg.body(), "");
    assert_eq!(msg.word_count(), 0);
}

#[test]
fn test_emoji_sequences_count_once() {
    let raw = "29/09/2019, 12:56 am - Alice: 👨\u{200D}👩\u{200D}👧 🇯🇵 👋🏽 ❤️";
    let msg = build(raw).unwrap().into_vec().remove(0);
    assert_eq!(msg.emojis().len(), 4);
}

#[test]
fn test_links_as_media_variant() {
    let raw = "29/09/2019, 12:56 am - Alice: https://example.org/x";
    assert!(!build(raw).unwrap().first().unwrap().is_media());

    let parser = TranscriptParser::with_config(ParseConfig::new().with_links_as_media(true));
    let msg = parser.parse_str(raw).unwrap().into_vec().remove(0);
    assert!(msg.is_media());
    assert_eq!(msg.body(), "");
}

// =========================================================================
// Aggregator boundaries
// =========================================================================

#[test]
fn test_single_message_chat() {
    let a = ChatAnalyzer::new(build("29/09/2019, 12:56 am - Alice: hi").unwrap());
    assert_eq!(a.total_days(), 0);
    assert_eq!(a.first_message_time(), a.last_message_time());
    assert_eq!(a.longest_message_by_words(), Some(("Alice", 1)));

    let report = a.report(&ReportConfig::default());
    assert!(report.average_messages_per_day.is_none());
}

#[test]
fn test_deleted_only_contact() {
    let a = ChatAnalyzer::new(build("29/09/2019, 12:56 am - Bob: This message was deleted").unwrap());
    let bob = a.per_user_summary("Bob").unwrap();
    assert_eq!(bob.messages, 1);
    assert_eq!(bob.deleted, 1);
    assert_eq!(bob.words_per_message().unwrap().truncated(), 0);
    assert!(bob.letters_per_word().unwrap_err().is_division_undefined());
}

#[test]
fn test_longest_message_tie_goes_to_earliest() {
    let raw = "01/01/2020, 10:00 - A: one two\n01/01/2020, 10:01 - B: three four";
    let a = ChatAnalyzer::new(build(raw).unwrap());
    assert_eq!(a.longest_message_by_words(), Some(("A", 2)));
}

#[test]
fn test_top_zero() {
    let a = ChatAnalyzer::new(build("01/01/2020, 10:00 - A: hi 😂").unwrap());
    assert!(a.top_words(0).is_empty());
    assert!(a.top_emojis(0).is_empty());
}

#[test]
fn test_manual_sequence() {
    let seq: MessageSequence = build("01/01/2020, 10:00 - A: hi").unwrap().into_vec().into();
    assert_eq!(ChatAnalyzer::new(seq).total_messages(), 1);
}
