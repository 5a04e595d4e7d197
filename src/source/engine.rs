//! Secret word selection

use super::SourceError;
use crate::core::{Difficulty, SecretWord};
use crate::wordlists::WordListProvider;
use crate::wordlists::loader::words_from_lines;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Letters in an `Impossible` word
pub const IMPOSSIBLE_LENGTH: usize = 5;

/// A shuffled tier list with its own read cursor
#[derive(Debug, Clone)]
struct WordList {
    difficulty: Difficulty,
    words: Vec<SecretWord>,
    cursor: usize,
}

impl WordList {
    fn new<R: Rng>(difficulty: Difficulty, mut words: Vec<SecretWord>, rng: &mut R) -> Self {
        words.shuffle(rng);
        Self {
            difficulty,
            words,
            cursor: 0,
        }
    }

    /// Next word in shuffled order, reshuffling once the list is used up
    fn next<R: Rng>(&mut self, rng: &mut R) -> SecretWord {
        if self.cursor >= self.words.len() {
            info!(
                difficulty = %self.difficulty,
                words = self.words.len(),
                "word list exhausted, reshuffling"
            );
            self.words.shuffle(rng);
            self.cursor = 0;
        }

        let word = self.words[self.cursor].clone();
        self.cursor += 1;
        word
    }
}

/// Supplies secret words by difficulty
///
/// Each list-backed tier is shuffled once at load and then read in order through its own
/// cursor. `Impossible` words are generated from the same RNG.
#[derive(Debug, Clone)]
pub struct WordSource<R = StdRng> {
    easy: WordList,
    medium: WordList,
    hard: WordList,
    rng: R,
}

impl WordSource<StdRng> {
    /// Load every tier from `provider`, seeding from the OS unless `seed` is given
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if any tier cannot be read or holds no valid words.
    pub fn load<P: WordListProvider>(provider: &P, seed: Option<u64>) -> Result<Self, SourceError> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(provider, rng)
    }
}

impl<R: Rng> WordSource<R> {
    /// Load every tier from `provider` using the given RNG
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if any tier cannot be read or holds no valid words.
    pub fn with_rng<P: WordListProvider>(provider: &P, mut rng: R) -> Result<Self, SourceError> {
        let mut load = |difficulty| load_tier(provider, difficulty, &mut rng);
        let easy = load(Difficulty::Easy)?;
        let medium = load(Difficulty::Medium)?;
        let hard = load(Difficulty::Hard)?;

        Ok(Self {
            easy,
            medium,
            hard,
            rng,
        })
    }

    /// Produce the next secret word for `difficulty`
    pub fn next_word(&mut self, difficulty: Difficulty) -> SecretWord {
        let word = match difficulty {
            Difficulty::Easy => self.easy.next(&mut self.rng),
            Difficulty::Medium => self.medium.next(&mut self.rng),
            Difficulty::Hard => self.hard.next(&mut self.rng),
            Difficulty::Impossible => random_word(&mut self.rng),
        };
        debug!(%difficulty, %word, "selected secret word");
        word
    }

    /// Words loaded for a tier, in current shuffled order
    ///
    /// Empty for `Impossible`.
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> &[SecretWord] {
        match difficulty {
            Difficulty::Easy => &self.easy.words,
            Difficulty::Medium => &self.medium.words,
            Difficulty::Hard => &self.hard.words,
            Difficulty::Impossible => &[],
        }
    }
}

fn load_tier<P: WordListProvider, R: Rng>(
    provider: &P,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<WordList, SourceError> {
    let lines = provider
        .lines(difficulty)
        .map_err(|source| SourceError::Load { difficulty, source })?;
    let words = words_from_lines(lines);

    if words.is_empty() {
        return Err(SourceError::EmptyList(difficulty));
    }

    info!(%difficulty, count = words.len(), "loaded word list");
    Ok(WordList::new(difficulty, words, rng))
}

/// Five independent, uniformly random letters A-Z
fn random_word<R: Rng>(rng: &mut R) -> SecretWord {
    let text: String = (0..IMPOSSIBLE_LENGTH)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();

    SecretWord::new(text).expect("generated letters are always A-Z")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EmbeddedWords, LoadError};
    use rustc_hash::FxHashSet;

    /// Provider backed by in-memory lists
    struct FixedWords {
        easy: Vec<&'static str>,
        medium: Vec<&'static str>,
        hard: Vec<&'static str>,
    }

    impl WordListProvider for FixedWords {
        fn lines(&self, difficulty: Difficulty) -> Result<Vec<String>, LoadError> {
            let list = match difficulty {
                Difficulty::Easy => &self.easy,
                Difficulty::Medium => &self.medium,
                Difficulty::Hard => &self.hard,
                Difficulty::Impossible => return Ok(Vec::new()),
            };
            Ok(list.iter().map(|s| (*s).to_string()).collect())
        }
    }

    fn small_provider() -> FixedWords {
        FixedWords {
            easy: vec!["cat", "dog", "owl"],
            medium: vec!["tiger"],
            hard: vec!["elephant", "kangaroo"],
        }
    }

    #[test]
    fn words_are_uppercase_from_the_right_tier() {
        let mut source = WordSource::with_rng(&small_provider(), StdRng::seed_from_u64(1)).unwrap();

        let easy = source.next_word(Difficulty::Easy);
        assert!(["CAT", "DOG", "OWL"].contains(&easy.text()));
        assert_eq!(source.next_word(Difficulty::Medium).text(), "TIGER");
        let hard = source.next_word(Difficulty::Hard);
        assert!(["ELEPHANT", "KANGAROO"].contains(&hard.text()));
    }

    #[test]
    fn successive_words_walk_the_shuffled_list() {
        let mut source = WordSource::with_rng(&small_provider(), StdRng::seed_from_u64(7)).unwrap();
        let expected: Vec<String> = source
            .words(Difficulty::Easy)
            .iter()
            .map(|w| w.text().to_string())
            .collect();

        let drawn: Vec<String> = (0..3)
            .map(|_| source.next_word(Difficulty::Easy).text().to_string())
            .collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn exhausted_list_wraps_with_every_word_again() {
        let mut source = WordSource::with_rng(&small_provider(), StdRng::seed_from_u64(3)).unwrap();

        let first: FxHashSet<String> = (0..3)
            .map(|_| source.next_word(Difficulty::Easy).text().to_string())
            .collect();
        let second: FxHashSet<String> = (0..3)
            .map(|_| source.next_word(Difficulty::Easy).text().to_string())
            .collect();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn cursors_are_independent_per_tier() {
        let mut source = WordSource::with_rng(&small_provider(), StdRng::seed_from_u64(5)).unwrap();
        let first_hard = source.words(Difficulty::Hard)[0].clone();

        source.next_word(Difficulty::Easy);
        source.next_word(Difficulty::Easy);

        assert_eq!(source.next_word(Difficulty::Hard), first_hard);
    }

    #[test]
    fn impossible_words_are_five_random_letters() {
        let mut source = WordSource::load(&EmbeddedWords, Some(42)).unwrap();
        for _ in 0..100 {
            let word = source.next_word(Difficulty::Impossible);
            assert_eq!(word.len(), IMPOSSIBLE_LENGTH);
            assert!(word.text().chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn same_seed_same_words() {
        let mut a = WordSource::load(&EmbeddedWords, Some(99)).unwrap();
        let mut b = WordSource::load(&EmbeddedWords, Some(99)).unwrap();
        for difficulty in Difficulty::ALL {
            assert_eq!(a.next_word(difficulty), b.next_word(difficulty));
        }
    }

    #[test]
    fn empty_tier_fails_at_load() {
        let provider = FixedWords {
            easy: vec!["cat"],
            medium: vec!["", "not a word"],
            hard: vec!["elephant"],
        };
        let err = WordSource::with_rng(&provider, StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, SourceError::EmptyList(Difficulty::Medium)));
    }

    #[test]
    fn unreadable_tier_fails_at_load() {
        let provider = crate::wordlists::WordDirectory::new("no/such/word/dir");
        let err = WordSource::load(&provider, Some(0)).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Load {
                difficulty: Difficulty::Easy,
                ..
            }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
