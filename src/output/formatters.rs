//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Pattern, Word};
use crate::game::AlertKind;
use colored::{ColoredString, Colorize};

/// Text for a transient alert
#[must_use]
pub fn alert_message(kind: AlertKind, secret: &Word) -> String {
    match kind {
        AlertKind::NotEnoughLetters => "Not enough letters".to_string(),
        AlertKind::WordNotFound => "Word not found".to_string(),
        AlertKind::GameLost => format!("You lost 💔 The word was {secret}"),
        AlertKind::ShareComplete => "Result copied, it will be printed when you quit".to_string(),
    }
}

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ").bold();
    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A committed guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, pattern: &Pattern) -> String {
    guess
        .letters()
        .iter()
        .zip(pattern.statuses())
        .map(|(&letter, &status)| letter_tile(letter, status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
