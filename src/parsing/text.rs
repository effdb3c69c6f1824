//! Body text measurements: word count, letter count and emoji extraction.

use unicode_segmentation::UnicodeSegmentation;

/// Counts whitespace-delimited tokens.
pub fn count_words(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Counts non-whitespace characters.
pub fn count_letters(body: &str) -> usize {
    body.chars().filter(|c| !c.is_whitespace()).count()
}

/// Extracts every emoji in `body`, in order of appearance, duplicates kept.
///
/// The body is walked by extended grapheme cluster, so multi-code-point
/// sequences (flags, ZWJ families, skin-tone variants, keycaps) count as one
/// emoji each.
///
/// ```rust
/// use chatstats::parsing::extract_emojis;
///
/// assert_eq!(extract_emojis("nice 😂😂 🇯🇵"), vec!["😂", "😂", "🇯🇵"]);
/// assert!(extract_emojis("plain text #1").is_empty());
/// ```
pub fn extract_emojis(body: &str) -> Vec<String> {
    body.graphemes(true)
        .filter(|g| is_emoji(g))
        .map(str::to_owned)
        .collect()
}

/// Returns `true` if a grapheme cluster is an emoji.
///
/// Lookups fall back to the variant without variation selectors and skin
/// tone modifiers, then to the fully-qualified form, so text-presentation
/// and partially qualified sequences are still recognised.
pub fn is_emoji(grapheme: &str) -> bool {
    // Plain digits, '#' and '*' are keycap bases, not emoji on their own
    if grapheme.is_ascii() {
        return false;
    }

    if emojis::get(grapheme).is_some() {
        return true;
    }

    let base: String = grapheme
        .chars()
        .filter(|&c| c != '\u{FE0F}' && !is_skin_tone(c))
        .collect();
    if base.is_empty() || base.is_ascii() {
        return false;
    }

    emojis::get(&base).is_some() || emojis::get(&format!("{base}\u{FE0F}")).is_some()
}

fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}
