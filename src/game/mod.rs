//! Turn-based game state
//!
//! An [`Attempt`] is one row of the guess grid; a [`GameSession`] owns the
//! rows, the secret, the cursor, and the win/lose state machine. Display
//! layers drive a session exclusively through [`Key`] events and read it back
//! through its queries.

mod attempt;
mod session;

pub use attempt::Attempt;
pub use session::{GameSession, GameStatus, Key, KeyFeedback, Notice};
