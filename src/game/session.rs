//! Game session state machine
//!
//! A session accepts key events while in progress and transitions to `Won` or
//! `Lost` on a submitted row. Both terminal states are final: every input is
//! ignored until a new session is started. "Not a real word" is not a state
//! transition at all; the row stays editable and only the notice changes.

use crate::core::{Feedback, LetterState, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::wordlists::WordList;

use super::Attempt;
use rustc_hash::FxHashSet;
use std::fmt;

/// A single logical input event from the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A literal letter key
    Letter(char),
    /// Backspace
    Delete,
    /// Submit the current row
    Enter,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// User-visible status message for the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The submitted row is not in the word list (carries the rejected text)
    NotAWord(String),
    /// The last submitted row matched the secret
    Won,
    /// All six attempts used (carries the revealed secret)
    Lost(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord(guess) => write!(f, "{guess} not a real word"),
            Self::Won => write!(f, "You did it!"),
            Self::Lost(secret) => write!(f, "The word was {secret}"),
        }
    }
}

/// Best-known feedback for a keyboard key, derived from the attempt history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFeedback {
    /// Letter has not produced any evaluated feedback yet
    Unknown,
    /// Letter occurs nowhere in the secret
    Absent,
    /// Letter occurs in the secret, last seen at a wrong position
    Present,
    /// Letter was last seen at a correct position
    Correct,
}

/// One game: the grid of attempts, the secret, and the cursor
///
/// Rows are created lazily, one at a time; rows beyond the current one do not
/// exist. The cursor's row index never exceeds 5 and its column stays within
/// `0..=5`.
#[derive(Debug)]
pub struct GameSession<'a> {
    words: &'a WordList,
    secret: Word,
    attempts: Vec<Attempt>,
    row: usize,
    col: usize,
    eliminated: FxHashSet<u8>,
    status: GameStatus,
    notice: Option<Notice>,
}

impl<'a> GameSession<'a> {
    /// Start a session guessing `secret`, validating guesses against `words`
    #[must_use]
    pub fn new(words: &'a WordList, secret: Word) -> Self {
        Self {
            words,
            secret,
            attempts: vec![Attempt::new()],
            row: 0,
            col: 0,
            eliminated: FxHashSet::default(),
            status: GameStatus::InProgress,
            notice: None,
        }
    }

    /// Dispatch a single input event
    ///
    /// This is the entire input surface a display layer needs. Any key press
    /// during play dismisses the current notice.
    pub fn key_press(&mut self, key: Key) {
        if self.status != GameStatus::InProgress {
            return;
        }
        self.notice = None;

        match key {
            Key::Letter(ch) => self.input_letter(ch),
            Key::Delete => self.delete_letter(),
            Key::Enter => self.submit(),
        }
    }

    /// Type a letter into the current row
    ///
    /// No-op unless the game is in progress, the cursor has room, and `ch` is
    /// an ASCII letter. Input is lowercased.
    pub fn input_letter(&mut self, ch: char) {
        if self.status != GameStatus::InProgress || self.col >= WORD_LENGTH {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            return;
        }

        let letter = ch.to_ascii_lowercase() as u8;
        self.attempts[self.row].set_letter(self.col, letter);
        self.col += 1;
    }

    /// Erase the letter before the cursor
    ///
    /// No-op unless the game is in progress and the row is non-empty.
    pub fn delete_letter(&mut self) {
        if self.status != GameStatus::InProgress || self.col == 0 {
            return;
        }

        self.col -= 1;
        self.attempts[self.row].clear_letter(self.col);
    }

    /// Submit the current row
    ///
    /// No-op unless the game is in progress and the row is full. A guess that
    /// is not in the word list sets a recoverable notice and leaves the row
    /// editable; a valid guess is evaluated and either ends the game or opens
    /// the next row.
    pub fn submit(&mut self) {
        if self.status != GameStatus::InProgress || self.col < WORD_LENGTH {
            return;
        }
        let Some(guess) = self.attempts[self.row].guess() else {
            return;
        };

        if !self.words.contains(&guess) {
            self.notice = Some(Notice::NotAWord(guess.text().to_uppercase()));
            return;
        }

        let feedback = Feedback::evaluate(&self.secret, &guess);
        let winning = feedback.is_winning();
        self.attempts[self.row].apply_states(feedback.states);
        self.eliminated.extend(feedback.eliminated);

        if winning {
            self.status = GameStatus::Won;
            self.notice = Some(Notice::Won);
            return;
        }

        if self.row + 1 == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.notice = Some(Notice::Lost(self.secret.text().to_uppercase()));
            return;
        }

        self.row += 1;
        self.col = 0;
        self.attempts.push(Attempt::new());
    }

    /// Letter shown at a grid cell, if any
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.attempts.get(row).and_then(|a| a.letter(col))
    }

    /// State of a grid cell; rows that do not exist yet read as `Blank`
    #[must_use]
    pub fn state_at(&self, row: usize, col: usize) -> LetterState {
        self.attempts
            .get(row)
            .map_or(LetterState::Blank, |a| a.state(col))
    }

    /// Best-known feedback for a keyboard key
    ///
    /// Derived from the full attempt history on every call; never cached. The
    /// last `Present`/`Correct` seen for the letter wins, and a letter known
    /// to occur nowhere in the secret reads `Absent` regardless of any
    /// positional state.
    #[must_use]
    pub fn key_feedback(&self, ch: char) -> KeyFeedback {
        if !ch.is_ascii_alphabetic() {
            return KeyFeedback::Unknown;
        }
        let letter = ch.to_ascii_lowercase() as u8;

        if self.eliminated.contains(&letter) {
            return KeyFeedback::Absent;
        }

        let mut best = KeyFeedback::Unknown;
        for attempt in &self.attempts {
            for col in 0..WORD_LENGTH {
                if attempt.letter_byte(col) != Some(letter) {
                    continue;
                }
                match attempt.state(col) {
                    LetterState::Present => best = KeyFeedback::Present,
                    LetterState::Correct => best = KeyFeedback::Correct,
                    // A positional Absent on a letter that does occur in the
                    // secret (duplicate depleted) never downgrades the key
                    _ => {}
                }
            }
        }
        best
    }

    /// Letters confirmed to occur nowhere in the secret, sorted
    #[must_use]
    pub fn eliminated_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.eliminated.iter().map(|&b| char::from(b)).collect();
        letters.sort_unstable();
        letters
    }

    /// Session lifecycle state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the session has been won or lost (play-again signal)
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Current status message, if any
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Cursor position as (row, column)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Rows created so far (at most six)
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The word this session's guesses are evaluated against
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> WordList {
        WordList::new(words_from_slice(&[
            "crane", "slate", "allow", "llama", "fghij", "abcde", "zzzzz", "water", "eerie",
            "stone", "beach", "rider",
        ]))
        .unwrap()
    }

    fn session<'a>(words: &'a WordList, secret: &str) -> GameSession<'a> {
        GameSession::new(words, Word::new(secret).unwrap())
    }

    fn type_word(game: &mut GameSession, text: &str) {
        for ch in text.chars() {
            game.key_press(Key::Letter(ch));
        }
    }

    fn play(game: &mut GameSession, text: &str) {
        type_word(game, text);
        game.key_press(Key::Enter);
    }

    #[test]
    fn fresh_session_state() {
        let words = lexicon();
        let game = session(&words, "crane");

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.attempts().len(), 1);
        assert_eq!(game.notice(), None);
        assert_eq!(game.state_at(0, 0), LetterState::Blank);
        assert_eq!(game.state_at(5, 4), LetterState::Blank);
    }

    #[test]
    fn typing_advances_cursor_and_normalizes_case() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        type_word(&mut game, "SlAtE");

        assert_eq!(game.cursor(), (0, 5));
        assert_eq!(game.letter_at(0, 0), Some('s'));
        assert_eq!(game.letter_at(0, 4), Some('e'));
        assert_eq!(game.state_at(0, 2), LetterState::Guessed);
    }

    #[test]
    fn input_past_column_five_is_ignored() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        type_word(&mut game, "slates");

        assert_eq!(game.cursor(), (0, 5));
        assert_eq!(game.letter_at(0, 4), Some('e'));
    }

    #[test]
    fn delete_at_column_zero_is_ignored() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        game.key_press(Key::Delete);
        assert_eq!(game.cursor(), (0, 0));

        type_word(&mut game, "sl");
        game.key_press(Key::Delete);
        game.key_press(Key::Delete);
        game.key_press(Key::Delete);

        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.letter_at(0, 0), None);
        assert_eq!(game.state_at(0, 0), LetterState::Blank);
    }

    #[test]
    fn non_letter_input_is_ignored() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        game.key_press(Key::Letter('1'));
        game.key_press(Key::Letter(' '));
        game.key_press(Key::Letter('é'));

        assert_eq!(game.cursor(), (0, 0));
    }

    #[test]
    fn submit_on_partial_row_is_ignored() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        type_word(&mut game, "sla");
        game.key_press(Key::Enter);

        assert_eq!(game.cursor(), (0, 3));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn unknown_word_is_rejected_and_row_stays_editable() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "qqqqq");

        // Nothing consumed: same row, same letters, states still Guessed
        assert_eq!(game.cursor(), (0, 5));
        assert_eq!(game.attempts().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.state_at(0, 0), LetterState::Guessed);
        assert_eq!(
            game.notice(),
            Some(&Notice::NotAWord("QQQQQ".to_string()))
        );

        // Row is still editable
        game.key_press(Key::Delete);
        assert_eq!(game.cursor(), (0, 4));
        assert_eq!(game.notice(), None);
    }

    #[test]
    fn valid_guess_opens_next_row() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "slate");

        assert_eq!(game.cursor(), (1, 0));
        assert_eq!(game.attempts().len(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.attempts()[0].is_evaluated());
    }

    #[test]
    fn winning_guess_ends_game_without_new_row() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "slate");
        play(&mut game, "crane");

        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());
        assert_eq!(game.notice(), Some(&Notice::Won));
        // Win suppresses creation of a further attempt
        assert_eq!(game.attempts().len(), 2);
        assert_eq!(game.cursor(), (1, 5));
    }

    #[test]
    fn win_on_first_attempt() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "crane");

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        for guess in ["slate", "allow", "llama", "fghij", "abcde", "zzzzz"] {
            play(&mut game, guess);
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(game.notice(), Some(&Notice::Lost("CRANE".to_string())));
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "crane");
        let cursor = game.cursor();

        game.key_press(Key::Letter('s'));
        game.key_press(Key::Delete);
        game.key_press(Key::Enter);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.cursor(), cursor);
        // Terminal notice survives further key presses
        assert_eq!(game.notice(), Some(&Notice::Won));
    }

    #[test]
    fn direct_operations_match_key_press() {
        let words = lexicon();
        let mut by_key = session(&words, "crane");
        let mut direct = session(&words, "crane");

        play(&mut by_key, "slate");

        for ch in "slate".chars() {
            direct.input_letter(ch);
        }
        direct.submit();

        assert_eq!(by_key.cursor(), direct.cursor());
        assert_eq!(by_key.attempts(), direct.attempts());
        assert_eq!(by_key.status(), direct.status());
    }

    #[test]
    fn eliminated_letters_accumulate_across_attempts() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "slate"); // eliminates s, l, t
        play(&mut game, "fghij"); // eliminates f, g, h, i, j

        assert_eq!(
            game.eliminated_letters(),
            vec!['f', 'g', 'h', 'i', 'j', 'l', 's', 't']
        );
    }

    #[test]
    fn keyboard_feedback_tracks_history() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        assert_eq!(game.key_feedback('a'), KeyFeedback::Unknown);

        play(&mut game, "slate");

        // slate vs crane: A and E are exact matches, S/L/T miss entirely
        assert_eq!(game.key_feedback('s'), KeyFeedback::Absent);
        assert_eq!(game.key_feedback('a'), KeyFeedback::Correct);
        assert_eq!(game.key_feedback('e'), KeyFeedback::Correct);
        assert_eq!(game.key_feedback('z'), KeyFeedback::Unknown);
        // Case-insensitive query
        assert_eq!(game.key_feedback('E'), KeyFeedback::Correct);
    }

    #[test]
    fn keyboard_feedback_upgrade_to_correct() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "allow"); // A present at position 0
        assert_eq!(game.key_feedback('a'), KeyFeedback::Present);

        play(&mut game, "crane"); // A correct at position 2
        assert_eq!(game.key_feedback('a'), KeyFeedback::Correct);
    }

    #[test]
    fn keyboard_feedback_ignores_unevaluated_row() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        type_word(&mut game, "slate");
        // Typed but not submitted: no feedback yet
        assert_eq!(game.key_feedback('s'), KeyFeedback::Unknown);
    }

    #[test]
    fn keyboard_feedback_depleted_duplicate_keeps_better_state() {
        // LLAMA against ALLOW: the second A reads Absent positionally, but A
        // does occur in the secret so the key must not read Absent
        let words = lexicon();
        let mut game = session(&words, "allow");

        play(&mut game, "llama");

        assert_eq!(game.key_feedback('a'), KeyFeedback::Present);
        assert_eq!(game.key_feedback('l'), KeyFeedback::Correct);
        assert_eq!(game.key_feedback('m'), KeyFeedback::Absent);
    }

    #[test]
    fn keyboard_feedback_is_idempotent() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "slate");

        let first: Vec<KeyFeedback> = ('a'..='z').map(|c| game.key_feedback(c)).collect();
        let second: Vec<KeyFeedback> = ('a'..='z').map(|c| game.key_feedback(c)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn notice_cleared_by_next_key_press() {
        let words = lexicon();
        let mut game = session(&words, "crane");

        play(&mut game, "qqqqq");
        assert!(game.notice().is_some());

        game.key_press(Key::Delete);
        assert_eq!(game.notice(), None);
    }
}
