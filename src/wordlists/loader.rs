//! Word list loading utilities
//!
//! Provides functions to turn raw lines (from files or embedded constants) into secret words.

use crate::core::SecretWord;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Error type for word list files that cannot be read
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl LoadError {
    /// Path of the file that failed to load
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read word list {}", self.path.display())
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Read the raw lines of a word list file
///
/// # Errors
///
/// Returns a `LoadError` carrying the path if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::read_lines;
///
/// let lines = read_lines("data/easy_words.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Convert raw lines to secret words
///
/// Lines are trimmed and blank lines skipped. Lines that are not a single alphabetic word
/// are skipped with a warning.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["cat", "", "dog"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CAT");
/// ```
pub fn words_from_lines<I, S>(lines: I) -> Vec<SecretWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                return None;
            }
            match SecretWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = trimmed, "skipping word list entry: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to `SecretWord` vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_uppercases() {
        let input = &["cat", "Tiger", "OWL"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "TIGER");
        assert_eq!(words[2].text(), "OWL");
    }

    #[test]
    fn words_from_lines_skips_blank_and_invalid() {
        let words = words_from_lines(["  cat  ", "", "   ", "ice cream", "x-ray", "dog"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn words_from_lines_handles_crlf() {
        let words = words_from_lines("cat\r\ndog\r\n".lines());
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn read_lines_missing_file_reports_path() {
        let err = read_lines("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.path(), Path::new("definitely/not/here.txt"));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn read_lines_from_file() {
        let path = std::env::temp_dir().join(format!("hangman-loader-{}.txt", std::process::id()));
        fs::write(&path, "cat\ndog\n").unwrap();

        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["cat".to_string(), "dog".to_string()]);
    }
}
