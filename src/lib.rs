//! Wordle Game
//!
//! A terminal Wordle-style word guessing game: six attempts to find a hidden
//! five-letter word, with per-letter feedback after each valid guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterState, Word};
//!
//! let secret = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.states[2], LetterState::Correct);
//! assert!(!feedback.is_winning());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
