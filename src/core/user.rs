//! Per-contact summaries and exact ratios.

use std::fmt;

use serde::Serialize;

use crate::error::{ChatstatsError, Result};

/// An exact quotient of two counts.
///
/// Ratios are kept as numerator and denominator so the presentation layer
/// picks the rounding. A zero denominator is unrepresentable: construction
/// fails with [`ChatstatsError::DivisionUndefined`].
///
/// ```rust
/// use chatstats::core::Ratio;
///
/// let ratio = Ratio::new(7, 2, "words per message")?;
/// assert_eq!(ratio.value(), 3.5);
/// assert_eq!(ratio.truncated(), 3);
///
/// assert!(Ratio::new(7, 0, "words per message").is_err());
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratio {
    numerator: usize,
    denominator: usize,
}

impl Ratio {
    /// Creates a ratio; `quantity` names it in the error when `denominator` is zero.
    pub fn new(numerator: usize, denominator: usize, quantity: &'static str) -> Result<Self> {
        if denominator == 0 {
            return Err(ChatstatsError::division_undefined(quantity));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> usize {
        self.numerator
    }

    /// Returns the denominator (never zero).
    pub fn denominator(&self) -> usize {
        self.denominator
    }

    /// Returns the exact value as a float.
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns the integer quotient, rounded toward zero.
    pub fn truncated(&self) -> usize {
        self.numerator / self.denominator
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Counts for one contact.
///
/// `messages` excludes media: a contact who only sent attachments has zero
/// messages. Deletion notices count as messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Display name
    pub contact: String,
    /// Non-media messages
    pub messages: usize,
    /// Media messages
    pub media: usize,
    /// Deletion notices
    pub deleted: usize,
    /// Sum of word counts
    pub words: usize,
    /// Sum of letter counts
    pub letters: usize,
    /// Total emoji sent
    pub emoji_count: usize,
    /// Most used emoji and its count, first-encountered on tie
    pub favorite_emoji: Option<(String, usize)>,
}

impl UserStats {
    /// Average words per counted message.
    pub fn words_per_message(&self) -> Result<Ratio> {
        Ratio::new(self.words, self.messages, "words per message")
    }

    /// Average letters per word.
    pub fn letters_per_word(&self) -> Result<Ratio> {
        Ratio::new(self.letters, self.words, "letters per word")
    }
}
