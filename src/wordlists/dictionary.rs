//! The dictionary collaborator
//!
//! Answers two questions for the session: is this guess an accepted word, and
//! is it the secret.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Membership tests over a fixed word list and a fixed secret word
pub trait Dictionary {
    /// Letter count every guess must have
    fn word_length(&self) -> usize;

    /// Whether `word` may be committed as a guess
    fn is_accepted(&self, word: &Word) -> bool;

    /// Whether `word` is the session's secret
    fn is_solution(&self, word: &Word) -> bool;
}

/// In-memory dictionary backed by a hash set
#[derive(Debug, Clone)]
pub struct WordList {
    accepted: FxHashSet<Word>,
    solution: Word,
}

impl WordList {
    /// Build a dictionary from accepted words and the secret
    ///
    /// The secret is always accepted, even if missing from `accepted`. Words
    /// whose length differs from the secret's are dropped.
    pub fn new(solution: Word, accepted: impl IntoIterator<Item = Word>) -> Self {
        let length = solution.len();
        let mut accepted: FxHashSet<Word> =
            accepted.into_iter().filter(|w| w.len() == length).collect();
        accepted.insert(solution.clone());

        Self { accepted, solution }
    }

    /// The secret word
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Never true: the secret is always accepted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

impl Dictionary for WordList {
    fn word_length(&self) -> usize {
        self.solution.len()
    }

    fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    fn is_solution(&self, word: &Word) -> bool {
        *word == self.solution
    }
}
