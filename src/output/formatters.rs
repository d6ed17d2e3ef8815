//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Render one grid row with colored cell backgrounds
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    (0..attempt.states().len())
        .map(|col| {
            let ch = attempt.letter(col).unwrap_or('_').to_ascii_uppercase();
            paint(ch, attempt.state(col)).to_string()
        })
        .collect()
}

fn paint(ch: char, state: LetterState) -> ColoredString {
    let cell = format!(" {ch} ");
    match state {
        LetterState::Correct => cell.black().on_green(),
        LetterState::Present => cell.black().on_yellow(),
        LetterState::Absent => cell.white().on_bright_black(),
        LetterState::Guessed | LetterState::Blank => cell.normal(),
    }
}

/// Render an evaluated row as a share-grid line
///
/// # Examples
/// ```
/// use wordle_game::core::LetterState;
/// use wordle_game::game::Attempt;
/// use wordle_game::output::emoji_row;
///
/// let mut row = Attempt::new();
/// for (col, &b) in b"crane".iter().enumerate() {
///     row.set_letter(col, b);
/// }
/// row.apply_states([LetterState::Correct; 5]);
/// assert_eq!(emoji_row(&row), "🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn emoji_row(attempt: &Attempt) -> String {
    attempt
        .states()
        .iter()
        .map(|state| match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            _ => '⬜',
        })
        .collect()
}

/// One-line summary of the letters known to be absent from the secret
#[must_use]
pub fn eliminated_summary(letters: &[char]) -> String {
    if letters.is_empty() {
        return String::new();
    }

    let list: String = letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("Not in the word: {list}")
}
