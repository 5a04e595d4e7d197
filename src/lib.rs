//! Hangman
//!
//! A terminal word-guessing game. Seven wrong letters and the drawing is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Difficulty, SecretWord};
//! use hangman::game::{Game, GameStatus};
//!
//! let mut game = Game::new(SecretWord::new("cat").unwrap(), Difficulty::Easy);
//! for letter in ['c', 'a', 't'] {
//!     game.guess(letter);
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Secret word selection
pub mod source;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
