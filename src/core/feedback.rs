//! Guess evaluation
//!
//! Scoring a guess against the secret is a pure function: it produces the five
//! per-letter states plus the guessed letters that appear nowhere in the
//! secret. Duplicate letters are handled with a working pool of the secret's
//! letter counts, so a letter that occurs once in the secret is never credited
//! twice.

use super::{LetterState, WORD_LENGTH, Word};

/// Result of evaluating one guess against the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Evaluated state for each of the five positions
    pub states: [LetterState; WORD_LENGTH],
    /// Guessed letters that do not occur anywhere in the secret
    pub eliminated: Vec<u8>,
}

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and claim that
    ///    letter from the pool of the secret's remaining letters
    /// 2. Second pass: a non-exact position is `Present` if the pool still
    ///    holds its letter (claiming one instance), otherwise `Absent`
    ///
    /// The pass order matters: exact matches must claim their letters first so
    /// a letter occurring once in the secret cannot show up as `Present` in a
    /// second position.
    ///
    /// A letter joins `eliminated` only when it occurs nowhere in the secret,
    /// so a letter used twice, once correctly and once not, is never reported
    /// as eliminated.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(feedback.states[2], LetterState::Correct);
    /// assert_eq!(feedback.states[4], LetterState::Correct);
    /// assert_eq!(feedback.eliminated, vec![b'c', b'r', b'n']);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut states = [LetterState::Guessed; WORD_LENGTH];
        let mut pool = secret.char_counts();

        // First pass: exact matches claim their letter from the pool
        // Allow: Index needed to access guess[i], secret[i], and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                states[i] = LetterState::Correct;

                if let Some(count) = pool.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining positions consume what the pool has left
        let mut eliminated = Vec::new();
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i] == LetterState::Correct {
                continue;
            }

            let letter = guess.char_at(i);
            match pool.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    states[i] = LetterState::Present;
                    *count -= 1;
                }
                _ => {
                    states[i] = LetterState::Absent;

                    // Eliminated means absent from the whole secret, not just
                    // depleted from the pool
                    if !secret.has_letter(letter) && !eliminated.contains(&letter) {
                        eliminated.push(letter);
                    }
                }
            }
        }

        Self { states, eliminated }
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }
}
