//! Core domain types for Hangman
//!
//! The secret word, its masked view and the difficulty tiers. No I/O happens here.

mod difficulty;
mod masked;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use masked::{HIDDEN, MaskedWord};
pub use word::{SecretWord, WordError};
