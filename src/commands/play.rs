//! Interactive play mode
//!
//! Difficulty prompt and the turn loop, written against any reader and writer.

use crate::core::Difficulty;
use crate::game::{Game, GameStatus, GuessOutcome, parse_guess};
use crate::output::{abandon_message, loss_message, render_game, win_message};
use crate::source::WordSource;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Options for a play session
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Skip the prompt and play this tier
    pub difficulty: Option<Difficulty>,
    /// Clear the terminal before each frame
    pub clear_screen: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(difficulty: Option<Difficulty>) -> Self {
        Self {
            difficulty,
            clear_screen: false,
        }
    }
}

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    /// Input closed while the game was still being played
    Abandoned,
}

/// Pick a difficulty, draw a word and play one game
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails, or if input closes before
/// a difficulty is chosen.
pub fn run_play<G: Rng>(
    source: &mut WordSource<G>,
    config: PlayConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<GameOutcome> {
    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => prompt_difficulty(input, out)?,
    };
    info!(%difficulty, "starting game");

    let mut game = Game::new(source.next_word(difficulty), difficulty);
    play_game(&mut game, config.clear_screen, input, out)
}

/// Ask for a difficulty until a valid one is entered
///
/// Accepts the menu number or the tier name.
///
/// # Errors
///
/// Returns `UnexpectedEof` if input closes first, or any underlying I/O error.
pub fn prompt_difficulty(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Difficulty> {
    loop {
        writeln!(out, "Choose difficulty:")?;
        writeln!(out, "(1 = Easy, 2 = Medium, 3 = Hard, 4 = Impossible)")?;
        write!(out, "Enter choice: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a difficulty was chosen",
            ));
        }

        match line.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(e) => writeln!(out, "{e}\n")?,
        }
    }
}

/// Run the turn loop until the game is won, lost or input runs out
///
/// The frame is drawn before every terminal check, so the final drawing is always shown.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn play_game(
    game: &mut Game,
    clear_screen: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<GameOutcome> {
    loop {
        if clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(out, "{}", render_game(game))?;

        match game.status() {
            GameStatus::Lost => {
                writeln!(out, "\n{}", loss_message(game.secret()))?;
                info!(strikes = game.strikes(), "game lost");
                return Ok(GameOutcome::Lost);
            }
            GameStatus::Won => {
                writeln!(out, "\n{}", win_message(game.secret(), game.strikes()))?;
                info!(strikes = game.strikes(), "game won");
                return Ok(GameOutcome::Won);
            }
            GameStatus::Playing => {}
        }

        write!(out, "Enter guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n{}", abandon_message(game.secret()))?;
            info!("input closed mid-game");
            return Ok(GameOutcome::Abandoned);
        }

        let Some(candidate) = parse_guess(&line) else {
            continue;
        };
        match game.guess(candidate) {
            GuessOutcome::Invalid => debug!(%candidate, "ignoring non-letter"),
            GuessOutcome::Repeated(letter) => debug!(%letter, "ignoring repeated guess"),
            GuessOutcome::Hit { .. } | GuessOutcome::Miss { .. } | GuessOutcome::Finished => {}
        }
    }
}
