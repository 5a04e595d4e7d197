//! Display functions for banners and game results

use crate::commands::ListSummary;
use crate::core::SecretWord;
use colored::Colorize;

/// Title shown when the program starts
#[must_use]
pub fn banner() -> String {
    format!(
        "{}\n{}\n{}",
        "═".repeat(34).cyan(),
        "            H A N G M A N".bright_yellow().bold(),
        "═".repeat(34).cyan()
    )
}

/// Message for a fully revealed word
#[must_use]
pub fn win_message(secret: &SecretWord, strikes: u8) -> String {
    let misses = if strikes == 1 { "miss" } else { "misses" };
    format!(
        "{}\n  {} with {strikes} {misses}",
        "You've won!".bright_green().bold(),
        secret.text().bright_white().bold()
    )
}

/// Message for a completed drawing
#[must_use]
pub fn loss_message(secret: &SecretWord) -> String {
    format!(
        "{} {}",
        "You lost! The word was:".red().bold(),
        secret.text().bright_white().bold()
    )
}

/// Message when input ends before the game does
#[must_use]
pub fn abandon_message(secret: &SecretWord) -> String {
    format!(
        "{} {}",
        "Game abandoned. The word was:".yellow(),
        secret.text().bright_white().bold()
    )
}

/// Print word counts and lengths for every tier
pub fn print_list_summary(summaries: &[ListSummary]) {
    println!("\n{}", "─".repeat(44).cyan());
    println!(" {}", "WORD LISTS".bright_cyan().bold());
    println!("{}", "─".repeat(44).cyan());

    for summary in summaries {
        match summary.lengths {
            Some((shortest, longest)) => println!(
                "  {:<12} {:>5} words   {shortest}-{longest} letters",
                summary.difficulty.to_string().bright_white().bold(),
                summary.count
            ),
            None => println!(
                "  {:<12} {:>5}         {} random letters",
                summary.difficulty.to_string().bright_white().bold(),
                "-",
                crate::source::IMPOSSIBLE_LENGTH
            ),
        }
    }
    println!();
}
