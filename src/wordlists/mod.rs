//! Word lists for Hangman
//!
//! Provides embedded word lists compiled into the binary, plus loading from a directory.

mod embedded;
pub mod loader;
pub mod provider;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use loader::LoadError;
pub use provider::{EmbeddedWords, WordDirectory, WordListProvider};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tier(words: &[&str], lengths: std::ops::RangeInclusive<usize>) {
        for &word in words {
            assert!(
                lengths.contains(&word.len()),
                "Word '{word}' has {} letters, expected {lengths:?}",
                word.len()
            );
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-alphabetic chars"
            );
        }
    }

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn easy_words_are_short() {
        assert_tier(EASY, 3..=4);
    }

    #[test]
    fn medium_words_are_mid_length() {
        assert_tier(MEDIUM, 5..=7);
    }

    #[test]
    fn hard_words_are_long() {
        assert_tier(HARD, 7..=usize::MAX);
    }

    #[test]
    fn lists_have_no_duplicates() {
        for list in [EASY, MEDIUM, HARD] {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }
}
