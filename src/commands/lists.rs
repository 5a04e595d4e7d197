//! Word list summary

use crate::core::Difficulty;
use crate::source::WordSource;
use rand::Rng;

/// Size of one tier's list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub difficulty: Difficulty,
    pub count: usize,
    /// Shortest and longest word, `None` for generated tiers
    pub lengths: Option<(usize, usize)>,
}

/// Summarize every tier of a loaded source
#[must_use]
pub fn summarize_lists<G: Rng>(source: &WordSource<G>) -> Vec<ListSummary> {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let words = source.words(difficulty);
            let shortest = words.iter().map(crate::core::SecretWord::len).min();
            let longest = words.iter().map(crate::core::SecretWord::len).max();

            ListSummary {
                difficulty,
                count: words.len(),
                lengths: shortest.zip(longest),
            }
        })
        .collect()
}
