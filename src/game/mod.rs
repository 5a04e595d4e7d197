//! Turn-by-turn game logic

mod state;

pub use state::{Game, GameStatus, GuessOutcome, MAX_STRIKES, parse_guess};
