//! Command implementations

pub mod lists;
pub mod play;

pub use lists::{ListSummary, summarize_lists};
pub use play::{GameOutcome, PlayConfig, play_game, prompt_difficulty, run_play};
