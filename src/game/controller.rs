//! Game session controller
//!
//! Owns the session, its dictionary and store, the statistics tally and the
//! alert timers. Every input goes through [`Session::apply`]; the controller
//! only reacts to the signals it returns.

use super::alerts::{AlertKind, AlertTimers};
use super::session::{Event, GameStatus, Session, Signal};
use super::share::share_text;
use super::stats::Statistics;
use crate::storage::GameStore;
use crate::wordlists::{Dictionary, WordList};
use std::time::Instant;

pub struct GameController<S: GameStore> {
    session: Session,
    dictionary: WordList,
    store: S,
    statistics: Statistics,
    alerts: AlertTimers,
    persist_session: bool,
}

impl<S: GameStore> GameController<S> {
    /// Start or resume the game for the dictionary's secret
    ///
    /// A stored session for the same secret is resumed; anything else is
    /// discarded. Resuming a finished game does not touch the statistics.
    pub fn new(dictionary: WordList, store: S) -> Self {
        let record = store.load_session();
        let session = Session::hydrate(dictionary.solution().clone(), record.as_ref());
        tracing::info!(
            guesses = session.guesses().len(),
            status = ?session.status(),
            "session ready"
        );
        Self::with_session(session, dictionary, store, true)
    }

    /// Practice game: the session is never loaded or saved, statistics are
    pub fn practice(dictionary: WordList, store: S) -> Self {
        let session = Session::new(dictionary.solution().clone());
        Self::with_session(session, dictionary, store, false)
    }

    fn with_session(session: Session, dictionary: WordList, store: S, persist: bool) -> Self {
        let statistics = store.load_statistics();
        Self {
            session,
            dictionary,
            store,
            statistics,
            alerts: AlertTimers::new(),
            persist_session: persist,
        }
    }

    /// Apply one input event at time `now`
    pub fn handle(&mut self, event: Event, now: Instant) -> Vec<Signal> {
        let transition = self.session.apply(event, &self.dictionary);
        if transition.session != self.session {
            self.alerts.cancel_validation();
        }
        self.session = transition.session;

        for signal in &transition.signals {
            match signal {
                Signal::Alert(kind) => self.alerts.schedule(*kind, now),
                Signal::GuessCommitted { guess, .. } => {
                    tracing::debug!(%guess, "guess committed");
                    self.save_session();
                }
                Signal::Completed(outcome) => {
                    self.statistics.record(*outcome);
                    if let Err(err) = self.store.save_statistics(&self.statistics) {
                        tracing::warn!(error = %err, "could not save statistics");
                    }
                }
            }
        }

        transition.signals
    }

    pub fn append_char(&mut self, c: char, now: Instant) -> Vec<Signal> {
        self.handle(Event::AppendChar(c), now)
    }

    pub fn delete_char(&mut self, now: Instant) -> Vec<Signal> {
        self.handle(Event::DeleteChar, now)
    }

    pub fn commit_guess(&mut self, now: Instant) -> Vec<Signal> {
        self.handle(Event::CommitGuess, now)
    }

    /// Clear alerts whose delay has elapsed; returns the cleared kinds
    pub fn tick(&mut self, now: Instant) -> Vec<AlertKind> {
        self.alerts.expire(now)
    }

    /// Produce share text for a finished game and raise the share alert
    pub fn share(&mut self, title: &str, index: i64, now: Instant) -> Option<String> {
        let text = share_text(title, index, &self.session)?;
        self.alerts.schedule(AlertKind::ShareComplete, now);
        Some(text)
    }

    fn save_session(&mut self) {
        if !self.persist_session {
            return;
        }
        if let Err(err) = self.store.save_session(&self.session.to_record()) {
            tracing::warn!(error = %err, "could not save session");
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[must_use]
    pub const fn alerts(&self) -> &AlertTimers {
        &self.alerts
    }

    #[must_use]
    pub const fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }
}
