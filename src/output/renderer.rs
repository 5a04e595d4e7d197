//! Gallows frame rendering
//!
//! Pure functions from game state to the text frame shown before each guess.

use crate::core::MaskedWord;
use crate::game::Game;

/// Columns in the guess box between the two `|` borders
pub const GUESS_BOX_WIDTH: usize = 30;

/// Column the masked word is centered on
const WORD_CENTER: usize = 14;

const GALLOWS_TOP: [&str; 3] = ["\t________________", "\t||             :", "\t||             :"];
const POST: &str = "\t||";

// Body parts in the order strikes add them
const HEAD: &str = "            (  )";
const NECK: &str = "             ||";
const LEFT_ARM: &str = "          \\__||";
const RIGHT_ARM: &str = "__/";
const TORSO: &str = "             ||";
const LEFT_LEG: &str = "          __/";
const RIGHT_LEG: &str = "  \\__";

/// Render the full frame for a game
#[must_use]
pub fn render_game(game: &Game) -> String {
    render_frame(game.strikes(), game.masked(), game.misses())
}

/// Render gallows, masked word and guess box
///
/// Body part N (1-7) is drawn iff `strikes >= N`.
#[must_use]
pub fn render_frame(strikes: u8, masked: &MaskedWord, misses: &[char]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16);
    lines.extend(render_figure(strikes));
    lines.extend(render_word(masked));
    lines.extend(render_guess_box(misses));

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

/// The gallows with the body parts earned so far
#[must_use]
pub fn render_figure(strikes: u8) -> Vec<String> {
    let part = |stage: u8, text: &'static str| if strikes >= stage { text } else { "" };

    let torso = part(5, TORSO);
    let mut lines: Vec<String> = GALLOWS_TOP.iter().map(|&line| line.to_string()).collect();
    lines.push(format!("{POST}{}", part(1, HEAD)));
    lines.push(format!("{POST}{}", part(2, NECK)));
    lines.push(format!("{POST}{}{}", part(3, LEFT_ARM), part(4, RIGHT_ARM)));
    lines.push(format!("{POST}{torso}"));
    lines.push(format!("{POST}{torso}"));
    lines.push(format!("{POST}{}{}", part(6, LEFT_LEG), part(7, RIGHT_LEG)));
    lines
}

/// Spaced masked word centered under the figure
fn render_word(masked: &MaskedWord) -> Vec<String> {
    let spaced = masked.spaced();
    let half = spaced.len() - spaced.len() / 2;
    let margin = " ".repeat(WORD_CENTER.saturating_sub(half));

    vec![
        POST.to_string(),
        format!("{POST}{margin}{spaced}"),
        POST.to_string(),
    ]
}

/// Base of the gallows and the box of incorrect letters, padded with `_`
fn render_guess_box(misses: &[char]) -> Vec<String> {
    let guessed: String = misses.iter().collect();
    let padding = "_".repeat(GUESS_BOX_WIDTH.saturating_sub(guessed.len()));

    vec![
        format!("________||{}", "_".repeat(GUESS_BOX_WIDTH - 8)),
        format!("|{:<width$}|", " Guesses:", width = GUESS_BOX_WIDTH),
        format!("|{guessed}{padding}|"),
    ]
}
