//! Difficulty tiers

use std::fmt;
use std::str::FromStr;

/// How hard the secret word is to guess
///
/// The first three tiers draw from curated word lists grouped by length. `Impossible`
/// generates random letters instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 3-4 letter words
    Easy,
    /// 5-7 letter words
    Medium,
    /// 7+ letter words
    Hard,
    /// Random gibberish
    Impossible,
}

/// Error returned when a difficulty name or number is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected easy, medium, hard, impossible or 1-4)",
            self.0
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl Difficulty {
    /// Every tier in menu order
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Impossible];

    /// Tiers backed by a word list
    pub const LISTED: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase name, as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Impossible => "impossible",
        }
    }

    /// Number shown in the selection menu (1-4)
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Impossible => 4,
        }
    }

    /// Whether words for this tier come from a word list
    #[must_use]
    pub const fn is_listed(self) -> bool {
        !matches!(self, Self::Impossible)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts a tier name (any case) or its menu number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "medium" | "2" => Ok(Self::Medium),
            "hard" | "3" => Ok(Self::Hard),
            "impossible" | "4" => Ok(Self::Impossible),
            _ => Err(ParseDifficultyError(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Impossible => "Impossible",
        };
        write!(f, "{label}")
    }
}
