//! Dictionary word representation
//!
//! A Word stores a validated 5-letter lowercase word as both text and bytes.

use super::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter word drawn from the dictionary or entered as a guess
///
/// Immutable once constructed. Stores the word as bytes alongside the text for
/// cheap per-position comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("gorge").unwrap();
    /// assert_eq!(word.text(), "gorge");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Safe to unwrap as we validated length == WORD_LEN
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Count how many times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("gorge").unwrap();
        assert_eq!(word.text(), "gorge");
        assert_eq!(word.chars(), b"gorge");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("GORGE").unwrap();
        assert_eq!(word.text(), "gorge");

        let word2 = Word::new("GoRgE").unwrap();
        assert_eq!(word2.text(), "gorge");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("gorg3").is_err()); // Number
        assert!(Word::new("gorg ").is_err()); // Space
        assert!(Word::new("gorg!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("gorge").unwrap();
        assert_eq!(word.char_at(0), b'g');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'r');
        assert_eq!(word.char_at(3), b'g');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("gorge").unwrap();
        assert!(word.has_letter(b'g'));
        assert!(word.has_letter(b'o'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("gorge").unwrap();
        assert_eq!(word.count_of(b'g'), 2);
        assert_eq!(word.count_of(b'o'), 1);
        assert_eq!(word.count_of(b'z'), 0);

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.count_of(b'a'), 5);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("crane").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("gorge").unwrap();
        assert_eq!(format!("{word}"), "gorge");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("gorge").unwrap();
        let word2 = Word::new("gorge").unwrap();
        let word3 = Word::new("GORGE").unwrap();
        let word4 = Word::new("forge").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
