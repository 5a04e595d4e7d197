//! Hangman - CLI
//!
//! Guess the word one letter at a time before the gallows drawing is complete.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, run_play, summarize_lists},
    core::Difficulty,
    output::{banner, print_list_summary},
    source::WordSource,
    wordlists::{EmbeddedWords, WordDirectory},
};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with easy, medium, hard and impossible words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory with easy_words.txt, medium_words.txt and hard_words.txt (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play {
        /// Difficulty: easy, medium, hard, impossible or 1-4 (prompted if omitted)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Do not clear the screen between turns
        #[arg(long)]
        no_clear: bool,
    },

    /// Show how many words each difficulty holds
    Lists,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = load_source(cli.words, cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: None,
        no_clear: false,
    });

    match command {
        Commands::Play {
            difficulty,
            no_clear,
        } => run_play_command(source, difficulty, !no_clear),
        Commands::Lists => {
            print_list_summary(&summarize_lists(&source));
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hangman={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the word source from the -w directory or the embedded lists
fn load_source(words: Option<PathBuf>, seed: Option<u64>) -> Result<WordSource> {
    match words {
        Some(dir) => {
            let provider = WordDirectory::new(dir);
            WordSource::load(&provider, seed)
                .with_context(|| format!("loading word lists from {}", provider.root().display()))
        }
        None => WordSource::load(&EmbeddedWords, seed).context("loading built-in word lists"),
    }
}

fn run_play_command(
    mut source: WordSource,
    difficulty: Option<Difficulty>,
    clear_screen: bool,
) -> Result<()> {
    println!("{}\n", banner());

    let config = PlayConfig {
        difficulty,
        clear_screen,
    };
    let stdin = io::stdin();
    let outcome = run_play(&mut source, config, &mut stdin.lock(), &mut io::stdout())
        .context("game aborted")?;

    // Won, lost and abandoned all exit successfully
    debug!(?outcome, "session finished");
    Ok(())
}
