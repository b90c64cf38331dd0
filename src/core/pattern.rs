//! Guess feedback calculation and representation
//!
//! A pattern holds one [`LetterStatus`] per position of the guess:
//! - Absent (letter not in the answer, or all copies already accounted for)
//! - Present (letter in the answer, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter
///
/// Ordered so that a better status compares greater, which is what the
/// keyboard uses to keep the best status seen per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess against an answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterStatus>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements the exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-wrong-position from the remaining pool
    ///
    /// Positions beyond the shorter of the two words are reported Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{LetterStatus, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![LetterStatus::Absent; guess_letters.len()];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, (g, a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unclaimed copy exists
        for (i, letter) in guess_letters.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter) {
                if *count > 0 {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
