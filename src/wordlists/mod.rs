//! Word source
//!
//! One list serves both duties: secrets are drawn from it and guesses are
//! validated against it. The embedded list is compiled into the binary; a
//! custom list can be loaded from a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error constructing a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The source contained no valid words; no game can be played
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// The fixed set of playable words
///
/// Owns the word vector for secret selection and a hashed index for O(1)
/// guess validation.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build a list from validated words
    ///
    /// # Errors
    /// Returns [`WordListError::Empty`] if `words` is empty; a game cannot
    /// start without a secret to pick.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let index = words.iter().map(|w| *w.chars()).collect();
        Ok(Self { words, index })
    }

    /// Membership test for guess validation
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Draw a random secret
    ///
    /// The randomness source is injected so sessions can be made
    /// deterministic under a seeded rng.
    ///
    /// # Panics
    /// Will not panic - construction guarantees the list is non-empty.
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words.choose(rng).expect("word list is never empty")
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false - an empty list cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn membership() {
        let list = WordList::new(words_from_slice(&["crane", "slate"])).unwrap();

        assert!(list.contains(&Word::new("crane").unwrap()));
        assert!(list.contains(&Word::new("SLATE").unwrap()));
        assert!(!list.contains(&Word::new("qqqqq").unwrap()));
    }

    #[test]
    fn pick_is_deterministic_with_seeded_rng() {
        let list = WordList::new(words_from_slice(&["crane", "slate", "raise"])).unwrap();

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(list.pick(&mut rng1), list.pick(&mut rng2));
    }

    #[test]
    fn pick_returns_member() {
        let list = WordList::new(words_from_slice(&["crane", "slate", "raise"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let secret = list.pick(&mut rng);
            assert!(list.contains(secret));
        }
    }

    #[test]
    fn embedded_words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_builds() {
        let list = WordList::new(words_from_slice(WORDS)).unwrap();
        assert_eq!(list.len(), WORDS_COUNT);
    }

    #[test]
    fn word_list_equality_helper() {
        // PartialEq on the error type only; the list itself derives Clone
        let list = WordList::new(words_from_slice(&["crane"])).unwrap();
        let copy = list.clone();
        assert_eq!(copy.len(), 1);
    }
}
