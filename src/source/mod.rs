//! Word source
//!
//! Picks the secret word for a game from the tier lists or from random letters.

mod engine;
mod error;

pub use engine::{IMPOSSIBLE_LENGTH, WordSource};
pub use error::SourceError;
