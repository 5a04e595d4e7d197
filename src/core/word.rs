//! Secret word representation
//!
//! A `SecretWord` stores an uppercase word along with letter position indices for reveal lookup.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player is trying to guess
///
/// Always uppercase ASCII letters, at least one of them. Keeps a map of letter positions so a
/// correct guess can reveal every occurrence at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(SecretWord::new("two words").is_err());
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `SecretWord` has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    ///
    /// The letter must already be uppercase.
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = SecretWord::new("cat").unwrap();
        assert_eq!(word.text(), "CAT");

        let word2 = SecretWord::new("CaT").unwrap();
        assert_eq!(word2.text(), "CAT");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(SecretWord::new("ca7"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("cat!"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn single_letter_is_valid() {
        let word = SecretWord::new("a").unwrap();
        assert_eq!(word.len(), 1);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("tiger").unwrap();
        assert!(word.has_letter('T'));
        assert!(word.has_letter('R'));
        assert!(!word.has_letter('Z'));
        // Lookups are on normalized letters only
        assert!(!word.has_letter('t'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.positions_of('A'), &[1, 3, 5]);
        assert_eq!(word.positions_of('N'), &[2, 4]);
        assert_eq!(word.positions_of('B'), &[0]);
        assert_eq!(word.positions_of('Q'), &[]);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("dog").unwrap();
        assert_eq!(format!("{word}"), "DOG");
    }
}
