//! Wordle Game - CLI
//!
//! Terminal Wordle-style word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{print_simulation_result, run_simple, run_simulation},
    interactive::{App, run_tui},
    wordlists::{
        WORDS, WordList,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle-style word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plays in the plain terminal without TUI)
    Simple,

    /// Auto-play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the word list based on the -w flag
///
/// The list must load, and be non-empty, before any session can start; a
/// failure here aborts the program.
fn load_wordlist(mode: &str) -> Result<WordList> {
    let words = match mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("failed to read word list from {path}"))?,
    };

    WordList::new(words).context("cannot start a game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&words, cli.seed)),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count } => {
            let result = run_simulation(&words, count, cli.seed);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
