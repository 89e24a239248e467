//! Word lists for the assistant
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost
//! access, plus file-based loading for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All entries should be 5 letters, lowercase ASCII
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_contains_common_words() {
        assert!(WORDS.contains(&"gorge"));
        assert!(WORDS.contains(&"stare"));
        assert!(WORDS.contains(&"crane"));
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let mut sorted: Vec<&str> = WORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), WORDS.len());
    }
}
