//! Word list providers
//!
//! A provider supplies the raw lines of the list for one difficulty tier.

use super::embedded::{EASY, HARD, MEDIUM};
use super::loader::{LoadError, read_lines};
use crate::core::Difficulty;
use std::path::{Path, PathBuf};

/// Source of line-delimited word lists, one per list-backed tier
pub trait WordListProvider {
    /// Raw lines for `difficulty`
    ///
    /// Returns an empty list for tiers that are not backed by a word list.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the underlying list cannot be read.
    fn lines(&self, difficulty: Difficulty) -> Result<Vec<String>, LoadError>;
}

/// File name used for a tier's list inside a word directory
#[must_use]
pub const fn file_name(difficulty: Difficulty) -> Option<&'static str> {
    match difficulty {
        Difficulty::Easy => Some("easy_words.txt"),
        Difficulty::Medium => Some("medium_words.txt"),
        Difficulty::Hard => Some("hard_words.txt"),
        Difficulty::Impossible => None,
    }
}

/// The lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl EmbeddedWords {
    /// Embedded constant for a tier
    #[must_use]
    pub const fn slice(difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
            Difficulty::Impossible => &[],
        }
    }
}

impl WordListProvider for EmbeddedWords {
    fn lines(&self, difficulty: Difficulty) -> Result<Vec<String>, LoadError> {
        Ok(Self::slice(difficulty)
            .iter()
            .map(|&word| word.to_string())
            .collect())
    }
}

/// A directory holding `easy_words.txt`, `medium_words.txt` and `hard_words.txt`
#[derive(Debug, Clone)]
pub struct WordDirectory {
    root: PathBuf,
}

impl WordDirectory {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WordListProvider for WordDirectory {
    fn lines(&self, difficulty: Difficulty) -> Result<Vec<String>, LoadError> {
        match file_name(difficulty) {
            Some(name) => read_lines(self.root.join(name)),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn embedded_provider_has_every_listed_tier() {
        for difficulty in Difficulty::LISTED {
            assert!(!EmbeddedWords.lines(difficulty).unwrap().is_empty());
        }
        assert!(EmbeddedWords.lines(Difficulty::Impossible).unwrap().is_empty());
    }

    #[test]
    fn file_names_match_listed_tiers() {
        for difficulty in Difficulty::ALL {
            assert_eq!(file_name(difficulty).is_some(), difficulty.is_listed());
        }
    }

    #[test]
    fn directory_provider_reads_files() {
        let dir = std::env::temp_dir().join(format!("hangman-provider-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("easy_words.txt"), "cat\ndog\n").unwrap();

        let provider = WordDirectory::new(&dir);
        let easy = provider.lines(Difficulty::Easy).unwrap();
        let medium = provider.lines(Difficulty::Medium);
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(easy, vec!["cat".to_string(), "dog".to_string()]);
        let err = medium.unwrap_err();
        assert!(err.path().ends_with("medium_words.txt"));
    }
}
