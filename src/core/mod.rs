//! Core domain types for the game
//!
//! Pure, testable value types: validated words and guess feedback.

mod pattern;
mod word;

pub use pattern::{LetterStatus, Pattern};
pub use word::{Word, WordError};
