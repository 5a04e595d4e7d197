//! Errors raised while building a word source

use crate::core::Difficulty;
use crate::wordlists::LoadError;
use std::fmt;

/// A tier could not be populated
#[derive(Debug)]
pub enum SourceError {
    /// The provider failed to read the tier's list
    Load {
        difficulty: Difficulty,
        source: LoadError,
    },
    /// The list was read but held no usable words
    EmptyList(Difficulty),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { difficulty, .. } => {
                write!(f, "failed to load the {difficulty} word list")
            }
            Self::EmptyList(difficulty) => {
                write!(f, "the {difficulty} word list contains no usable words")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
            Self::EmptyList(_) => None,
        }
    }
}
