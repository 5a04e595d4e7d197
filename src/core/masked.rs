//! Masked view of the secret word
//!
//! One cell per letter, hidden until that letter is guessed.

use super::SecretWord;
use std::fmt;

/// Placeholder shown for a hidden letter
pub const HIDDEN: char = '_';

/// Per-position reveal state of a `SecretWord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedWord {
    cells: Vec<Option<char>>,
}

impl MaskedWord {
    /// Create a fully hidden mask for a word
    #[must_use]
    pub fn new(word: &SecretWord) -> Self {
        Self {
            cells: vec![None; word.len()],
        }
    }

    /// Reveal every occurrence of `letter` in `word`
    ///
    /// Returns the number of cells that matched.
    pub fn reveal(&mut self, word: &SecretWord, letter: char) -> usize {
        let positions = word.positions_of(letter);
        for &pos in positions {
            self.cells[pos] = Some(letter);
        }
        positions.len()
    }

    /// Check whether `letter` has been revealed anywhere
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// Number of cells still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// True once every cell is revealed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Cells in word order, `None` for hidden
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Letters separated by spaces, e.g. `_ A R _ _`
    #[must_use]
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell.unwrap_or(HIDDEN));
        }
        out
    }
}

impl fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(HIDDEN))?;
        }
        Ok(())
    }
}
