//! Simple interactive CLI mode
//!
//! Text-based game in the terminal without the TUI.

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, GameStatus, Key, Notice};
use crate::output::{colored_row, eliminated_summary, emoji_row};
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple CLI game mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &WordList) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Simple Terminal Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in six tries.");
    println!("After each guess the row is colored:\n");
    println!("  - Green: right letter, right place");
    println!("  - Yellow: right letter, wrong place");
    println!("  - Gray: letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut rng = rand::rng();

    'game: loop {
        let secret = words.pick(&mut rng).clone();
        let mut session = GameSession::new(words, secret);

        loop {
            let (row, _) = session.cursor();
            let prompt = format!("Guess {}/6", row + 1);
            let input = get_user_input(&prompt)?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                _ => {}
            }

            if input.len() != WORD_LENGTH || !input.chars().all(|c| c.is_ascii_alphabetic()) {
                println!("❌ Please enter exactly {WORD_LENGTH} letters.\n");
                continue;
            }

            for ch in input.chars() {
                session.key_press(Key::Letter(ch));
            }
            session.key_press(Key::Enter);

            if let Some(Notice::NotAWord(guess)) = session.notice() {
                println!("❌ {guess} not a real word\n");
                // Leave the row empty for the next try
                for _ in 0..WORD_LENGTH {
                    session.key_press(Key::Delete);
                }
                continue;
            }

            println!("\n  {}", colored_row(&session.attempts()[row]));
            let eliminated = session.eliminated_letters();
            if !eliminated.is_empty() {
                println!("  {}", eliminated_summary(&eliminated).bright_black());
            }
            println!();

            match session.status() {
                GameStatus::InProgress => {}
                GameStatus::Won => {
                    print_win(&session);
                    if !play_again()? {
                        return Ok(());
                    }
                    continue 'game;
                }
                GameStatus::Lost => {
                    println!(
                        "{}",
                        format!("💀 The word was {}", session.secret().text().to_uppercase())
                            .bright_red()
                            .bold()
                    );
                    print_share_grid(&session);
                    if !play_again()? {
                        return Ok(());
                    }
                    continue 'game;
                }
            }
        }
    }
}

fn print_win(session: &GameSession) {
    let turns = session.attempts().len();

    println!("{}", "═".repeat(60).bright_cyan());
    println!("{}", "  🎉  Y O U   D I D   I T !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match turns {
        1 => "🏆 Perfect! Incredible hole-in-one!",
        2 => "⭐ Excellent! Outstanding performance!",
        3 => "💫 Great! Very well played!",
        4 => "✨ Good! Nice work!",
        5 => "👍 Solved! Got it!",
        _ => "😅 Phew! That was close!",
    };
    println!("\n  {}", performance.bright_yellow());
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    print_share_grid(session);
}

fn print_share_grid(session: &GameSession) {
    println!("\n  Your game:");
    for attempt in session.attempts() {
        println!("    {}", emoji_row(attempt));
    }
    println!();
}

fn play_again() -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
