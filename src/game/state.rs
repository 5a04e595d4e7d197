//! Game state machine
//!
//! Owns the secret word, its masked view, the miss history and the strike count.

use crate::core::{Difficulty, MaskedWord, SecretWord};
use tracing::debug;

/// Strikes that complete the drawing and lose the game
pub const MAX_STRIKES: u8 = 7;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a letter; ignored
    Invalid,
    /// Letter was already tried; ignored
    Repeated(char),
    /// Letter is in the word; `revealed` cells were uncovered
    Hit { letter: char, revealed: usize },
    /// Letter is not in the word; `strikes` is the new total
    Miss { letter: char, strikes: u8 },
    /// The game already ended; nothing changed
    Finished,
}

/// A single game of hangman
///
/// Correct letters are tracked only through the masked word. Incorrect letters are kept in
/// `misses`, in the order they were guessed, for the guess box.
#[derive(Debug, Clone)]
pub struct Game {
    difficulty: Difficulty,
    secret: SecretWord,
    masked: MaskedWord,
    misses: Vec<char>,
    strikes: u8,
}

impl Game {
    #[must_use]
    pub fn new(secret: SecretWord, difficulty: Difficulty) -> Self {
        let masked = MaskedWord::new(&secret);
        Self {
            difficulty,
            secret,
            masked,
            misses: Vec::new(),
            strikes: 0,
        }
    }

    /// Current status, derived from strikes and the masked word
    ///
    /// A completed drawing takes precedence over a completed word.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.strikes >= MAX_STRIKES {
            GameStatus::Lost
        } else if self.masked.is_complete() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Resolve one guess
    ///
    /// Non-letters and repeats are free. A novel letter either reveals every occurrence or
    /// adds exactly one strike.
    pub fn guess(&mut self, candidate: char) -> GuessOutcome {
        if self.status().is_over() {
            return GuessOutcome::Finished;
        }

        if !candidate.is_ascii_alphabetic() {
            return GuessOutcome::Invalid;
        }
        let letter = candidate.to_ascii_uppercase();

        if self.has_guessed(letter) {
            return GuessOutcome::Repeated(letter);
        }

        if self.secret.has_letter(letter) {
            let revealed = self.masked.reveal(&self.secret, letter);
            debug!(%letter, revealed, "correct guess");
            GuessOutcome::Hit { letter, revealed }
        } else {
            self.misses.push(letter);
            self.strikes += 1;
            debug!(%letter, strikes = self.strikes, "incorrect guess");
            GuessOutcome::Miss {
                letter,
                strikes: self.strikes,
            }
        }
    }

    /// Whether `letter` (uppercase) was already tried, correctly or not
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.misses.contains(&letter) || self.masked.is_revealed(letter)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn masked(&self) -> &MaskedWord {
        &self.masked
    }

    /// Incorrect letters in guess order
    #[must_use]
    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    #[must_use]
    pub fn strikes(&self) -> u8 {
        self.strikes
    }
}

/// Candidate guess from a line of input: its first non-whitespace character
#[must_use]
pub fn parse_guess(line: &str) -> Option<char> {
    line.trim_start().chars().next()
}
