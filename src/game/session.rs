//! Session state and the pure transition function
//!
//! A [`Session`] never mutates in place from the outside: [`Session::apply`]
//! takes an input [`Event`] and returns the next session together with the
//! [`Signal`]s the presentation and persistence layers react to.

use super::alerts::AlertKind;
use crate::core::{LetterStatus, Pattern, Word};
use crate::storage::SessionRecord;
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;

/// Maximum number of committed guesses per session
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost accept no further input
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempts: usize },
    Lost,
}

impl GameOutcome {
    /// Guess count the outcome is recorded under
    ///
    /// A loss always counts as [`MAX_GUESSES`].
    #[must_use]
    pub const fn attempts(self) -> usize {
        match self {
            Self::Won { attempts } => attempts,
            Self::Lost => MAX_GUESSES,
        }
    }
}

/// Input events from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AppendChar(char),
    DeleteChar,
    CommitGuess,
}

/// Outputs of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A transient alert should be shown
    Alert(AlertKind),
    /// A guess joined the committed list
    GuessCommitted { guess: Word, pattern: Pattern },
    /// The session just became terminal; fires once per session
    Completed(GameOutcome),
}

/// Result of applying an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub signals: Vec<Signal>,
}

/// One game against one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Word,
    guesses: Vec<Word>,
    current: String,
    status: GameStatus,
}

impl Session {
    /// Fresh session with no guesses
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            current: String::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a session from a persisted record
    ///
    /// The record is discarded, giving a fresh session, when it belongs to a
    /// different secret or its guesses could not have been produced by play:
    /// wrong length, more than [`MAX_GUESSES`], or guesses after the secret.
    /// The status is derived from the guesses; no signals are produced.
    #[must_use]
    pub fn hydrate(secret: Word, record: Option<&SessionRecord>) -> Self {
        let Some(record) = record else {
            return Self::new(secret);
        };

        let stored_secret = Word::new(&record.solution).ok();
        if stored_secret.as_ref() != Some(&secret) {
            tracing::info!(
                stored = %record.solution,
                current = %secret,
                "persisted session belongs to another word, starting fresh"
            );
            return Self::new(secret);
        }

        match Self::replay(secret.clone(), &record.guesses) {
            Some(session) => session,
            None => {
                tracing::warn!("persisted session is inconsistent, starting fresh");
                Self::new(secret)
            }
        }
    }

    fn replay(secret: Word, guesses: &[String]) -> Option<Self> {
        if guesses.len() > MAX_GUESSES {
            return None;
        }

        let mut session = Self::new(secret);
        for text in guesses {
            if session.status.is_terminal() {
                return None;
            }
            let guess = Word::with_length(text, session.word_length()).ok()?;
            session.status = session.status_after(&guess, session.guesses.len() + 1);
            session.guesses.push(guess);
        }
        Some(session)
    }

    fn status_after(&self, guess: &Word, committed: usize) -> GameStatus {
        if *guess == self.secret {
            GameStatus::Won
        } else if committed >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply one input event
    ///
    /// Terminal sessions return themselves unchanged with no signals.
    #[must_use]
    pub fn apply<D: Dictionary + ?Sized>(&self, event: Event, dictionary: &D) -> Transition {
        debug_assert!(
            dictionary.is_solution(&self.secret),
            "dictionary built for another secret"
        );
        let mut next = self.clone();
        let signals = match event {
            Event::AppendChar(c) => {
                next.push_char(c);
                Vec::new()
            }
            Event::DeleteChar => {
                next.pop_char();
                Vec::new()
            }
            Event::CommitGuess => next.commit(dictionary),
        };

        Transition {
            session: next,
            signals,
        }
    }

    fn push_char(&mut self, c: char) {
        if self.status.is_terminal() || self.guesses.len() >= MAX_GUESSES {
            return;
        }
        // Some letters upper-case to several chars ('ß' -> "SS")
        let upper: String = c.to_uppercase().collect();
        if self.current_len() + upper.chars().count() > self.word_length() {
            return;
        }
        self.current.push_str(&upper);
    }

    fn pop_char(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.current.pop();
    }

    fn commit<D: Dictionary + ?Sized>(&mut self, dictionary: &D) -> Vec<Signal> {
        if self.status.is_terminal() || self.guesses.len() >= MAX_GUESSES {
            return Vec::new();
        }

        if self.current_len() != self.word_length() {
            return vec![Signal::Alert(AlertKind::NotEnoughLetters)];
        }

        let guess = match Word::new(&self.current) {
            Ok(word) if dictionary.is_accepted(&word) => word,
            _ => return vec![Signal::Alert(AlertKind::WordNotFound)],
        };

        let pattern = Pattern::calculate(&guess, &self.secret);
        let committed = self.guesses.len() + 1;
        self.status = self.status_after(&guess, committed);
        self.guesses.push(guess.clone());
        self.current.clear();

        let mut signals = vec![Signal::GuessCommitted { guess, pattern }];

        if self.status == GameStatus::Won {
            tracing::info!(attempts = committed, "game won");
            signals.push(Signal::Completed(GameOutcome::Won {
                attempts: committed,
            }));
        } else if self.status == GameStatus::Lost {
            tracing::info!(secret = %self.secret, "game lost");
            signals.push(Signal::Completed(GameOutcome::Lost));
            signals.push(Signal::Alert(AlertKind::GameLost));
        }

        signals
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Committed guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The guess being typed
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    fn current_len(&self) -> usize {
        self.current.chars().count()
    }

    /// Each committed guess with its feedback
    #[must_use]
    pub fn evaluations(&self) -> Vec<(Word, Pattern)> {
        self.guesses
            .iter()
            .map(|g| (g.clone(), Pattern::calculate(g, &self.secret)))
            .collect()
    }

    /// Best status seen so far for every guessed letter
    #[must_use]
    pub fn letter_statuses(&self) -> FxHashMap<char, LetterStatus> {
        let mut statuses: FxHashMap<char, LetterStatus> = FxHashMap::default();
        for (guess, pattern) in self.evaluations() {
            for (&letter, &status) in guess.letters().iter().zip(pattern.statuses()) {
                let entry = statuses.entry(letter).or_insert(status);
                *entry = (*entry).max(status);
            }
        }
        statuses
    }

    /// Persistable form of this session
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            solution: self.secret.text().to_string(),
            guesses: self.guesses.iter().map(|g| g.text().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    const MISSES: [&str; 6] = ["crane", "slate", "audio", "moist", "burnt", "fight"];

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary() -> WordList {
        let mut words = words_from_slice(&MISSES, 5);
        words.extend(words_from_slice(&["grape", "melon"], 5));
        WordList::new(word("apple"), words)
    }

    fn type_word(session: Session, text: &str, dict: &WordList) -> Session {
        text.chars()
            .fold(session, |s, c| s.apply(Event::AppendChar(c), dict).session)
    }

    fn guess(session: Session, text: &str, dict: &WordList) -> Transition {
        type_word(session, text, dict).apply(Event::CommitGuess, dict)
    }

    #[test]
    fn append_uppercases_and_stops_at_word_length() {
        let dict = dictionary();
        let session = type_word(Session::new(word("apple")), "grapes", &dict);
        assert_eq!(session.current_guess(), "GRAPE");
    }

    #[test]
    fn multi_char_uppercase_never_overflows_guess() {
        let dict = dictionary();
        let four = type_word(Session::new(word("apple")), "appl", &dict);
        let after = four.apply(Event::AppendChar('ß'), &dict).session;
        assert_eq!(after.current_guess(), "APPL");

        let three = type_word(Session::new(word("apple")), "gla", &dict);
        let after = three.apply(Event::AppendChar('ß'), &dict).session;
        assert_eq!(after.current_guess(), "GLASS");
    }

    #[test]
    fn win_is_decided_the_same_live_and_on_replay() {
        let dict = dictionary();
        let live = guess(Session::new(word("apple")), "apple", &dict).session;
        let replayed = Session::hydrate(word("apple"), Some(&live.to_record()));
        assert_eq!(live.status(), GameStatus::Won);
        assert_eq!(replayed.status(), live.status());
    }

    #[test]
    fn delete_removes_last_char_and_is_noop_when_empty() {
        let dict = dictionary();
        let session = type_word(Session::new(word("apple")), "ab", &dict);
        let session = session.apply(Event::DeleteChar, &dict).session;
        assert_eq!(session.current_guess(), "A");

        let empty = Session::new(word("apple"));
        let after = empty.apply(Event::DeleteChar, &dict);
        assert_eq!(after.session, empty);
        assert!(after.signals.is_empty());
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let dict = dictionary();
        let t = guess(Session::new(word("apple")), "appl", &dict);

        assert_eq!(t.signals, vec![Signal::Alert(AlertKind::NotEnoughLetters)]);
        assert!(t.session.guesses().is_empty());
        assert_eq!(t.session.current_guess(), "APPL");
    }

    #[test]
    fn unknown_word_is_rejected_and_kept() {
        let dict = dictionary();
        let t = guess(Session::new(word("apple")), "xxxxx", &dict);

        assert_eq!(t.signals, vec![Signal::Alert(AlertKind::WordNotFound)]);
        assert!(t.session.guesses().is_empty());
        assert_eq!(t.session.current_guess(), "XXXXX");
    }

    #[test]
    fn non_letter_guess_counts_as_unknown_word() {
        let dict = dictionary();
        let t = guess(Session::new(word("apple")), "appl3", &dict);
        assert_eq!(t.signals, vec![Signal::Alert(AlertKind::WordNotFound)]);
    }

    #[test]
    fn correct_guess_wins_on_first_attempt() {
        let dict = dictionary();
        let t = guess(Session::new(word("apple")), "apple", &dict);

        assert_eq!(t.session.status(), GameStatus::Won);
        assert_eq!(t.session.guesses(), &[word("apple")]);
        assert_eq!(t.session.current_guess(), "");
        assert!(t.signals.contains(&Signal::Completed(GameOutcome::Won { attempts: 1 })));
    }

    #[test]
    fn valid_miss_is_committed_and_cleared() {
        let dict = dictionary();
        let t = guess(Session::new(word("apple")), "grape", &dict);

        assert_eq!(t.session.status(), GameStatus::InProgress);
        assert_eq!(t.session.guesses().len(), 1);
        assert_eq!(t.session.current_guess(), "");
        assert_eq!(t.signals.len(), 1);
        assert!(matches!(t.signals[0], Signal::GuessCommitted { .. }));
    }

    #[test]
    fn six_misses_lose_and_block_further_guesses() {
        let dict = dictionary();
        let mut session = Session::new(word("apple"));
        let mut completions = 0;

        for miss in MISSES {
            let t = guess(session, miss, &dict);
            completions += t
                .signals
                .iter()
                .filter(|s| matches!(s, Signal::Completed(_)))
                .count();
            session = t.session;
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.guesses().len(), MAX_GUESSES);
        assert_eq!(completions, 1);

        let t = guess(session.clone(), "apple", &dict);
        assert_eq!(t.session, session);
        assert!(t.signals.is_empty());
    }

    #[test]
    fn loss_signals_outcome_and_alert() {
        let dict = dictionary();
        let session = MISSES[..5]
            .iter()
            .fold(Session::new(word("apple")), |s, m| guess(s, m, &dict).session);

        let t = guess(session, MISSES[5], &dict);
        assert!(t.signals.contains(&Signal::Completed(GameOutcome::Lost)));
        assert!(t.signals.contains(&Signal::Alert(AlertKind::GameLost)));
        assert_eq!(GameOutcome::Lost.attempts(), 6);
    }

    #[test]
    fn won_session_ignores_all_events() {
        let dict = dictionary();
        let won = guess(Session::new(word("apple")), "apple", &dict).session;

        for event in [Event::AppendChar('a'), Event::DeleteChar, Event::CommitGuess] {
            let t = won.apply(event, &dict);
            assert_eq!(t.session, won);
            assert!(t.signals.is_empty());
        }
    }

    #[test]
    fn hydrate_matching_record_restores_guesses() {
        let record = SessionRecord {
            solution: "APPLE".into(),
            guesses: vec!["GRAPE".into(), "MELON".into()],
        };
        let session = Session::hydrate(word("apple"), Some(&record));

        assert_eq!(session.guesses().len(), 2);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn hydrate_other_secret_starts_fresh() {
        let record = SessionRecord {
            solution: "GRAPE".into(),
            guesses: vec!["APPLE".into()],
        };
        let session = Session::hydrate(word("apple"), Some(&record));

        assert!(session.guesses().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn hydrate_derives_terminal_status() {
        let won = SessionRecord {
            solution: "apple".into(),
            guesses: vec!["grape".into(), "apple".into()],
        };
        assert_eq!(
            Session::hydrate(word("apple"), Some(&won)).status(),
            GameStatus::Won
        );

        let lost = SessionRecord {
            solution: "apple".into(),
            guesses: MISSES.iter().map(|s| (*s).to_string()).collect(),
        };
        assert_eq!(
            Session::hydrate(word("apple"), Some(&lost)).status(),
            GameStatus::Lost
        );
    }

    #[test]
    fn hydrate_rejects_impossible_records() {
        let after_win = SessionRecord {
            solution: "apple".into(),
            guesses: vec!["apple".into(), "grape".into()],
        };
        assert!(
            Session::hydrate(word("apple"), Some(&after_win))
                .guesses()
                .is_empty()
        );

        let wrong_length = SessionRecord {
            solution: "apple".into(),
            guesses: vec!["kiwi".into()],
        };
        assert!(
            Session::hydrate(word("apple"), Some(&wrong_length))
                .guesses()
                .is_empty()
        );

        let mut too_many: Vec<String> = MISSES.iter().map(|s| (*s).to_string()).collect();
        too_many.push("grape".into());
        let overflow = SessionRecord {
            solution: "apple".into(),
            guesses: too_many,
        };
        assert!(
            Session::hydrate(word("apple"), Some(&overflow))
                .guesses()
                .is_empty()
        );
    }

    #[test]
    fn letter_statuses_keep_best_status() {
        let dict = dictionary();
        // GRAPE vs APPLE leaves P present, then APPLE upgrades it
        let session = guess(Session::new(word("apple")), "grape", &dict).session;
        let session = guess(session, "apple", &dict).session;
        let statuses = session.letter_statuses();

        assert_eq!(statuses[&'P'], LetterStatus::Correct);
        assert_eq!(statuses[&'G'], LetterStatus::Absent);
        assert_eq!(statuses[&'E'], LetterStatus::Correct);
    }

    #[test]
    fn record_roundtrips_through_hydrate() {
        let dict = dictionary();
        let session = guess(Session::new(word("apple")), "melon", &dict).session;
        let restored = Session::hydrate(word("apple"), Some(&session.to_record()));
        assert_eq!(restored, session);
    }
}
