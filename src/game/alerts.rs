//! Transient alerts and their auto-dismiss timers
//!
//! Each alert kind has at most one pending deadline. Scheduling a kind again
//! replaces its deadline; state-changing input cancels validation alerts.

use std::time::{Duration, Instant};

/// Delay before validation alerts clear
pub const VALIDATION_ALERT_DELAY: Duration = Duration::from_secs(3);

/// Delay before outcome and share alerts clear
pub const OUTCOME_ALERT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Guess shorter than the word
    NotEnoughLetters,
    /// Guess not in the dictionary
    WordNotFound,
    /// Sixth miss; reveals the secret
    GameLost,
    /// Share text produced
    ShareComplete,
}

impl AlertKind {
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::NotEnoughLetters | Self::WordNotFound => VALIDATION_ALERT_DELAY,
            Self::GameLost | Self::ShareComplete => OUTCOME_ALERT_DELAY,
        }
    }

    /// Alerts produced by rejected guesses
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(self, Self::NotEnoughLetters | Self::WordNotFound)
    }
}

/// Pending alert deadlines, oldest first
#[derive(Debug, Clone, Default)]
pub struct AlertTimers {
    pending: Vec<(AlertKind, Instant)>,
}

impl AlertTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `kind` until `now + kind.delay()`, replacing any earlier deadline
    pub fn schedule(&mut self, kind: AlertKind, now: Instant) {
        self.cancel(kind);
        self.pending.push((kind, now + kind.delay()));
    }

    /// Drop the pending deadline for `kind`, if any
    pub fn cancel(&mut self, kind: AlertKind) {
        self.pending.retain(|&(k, _)| k != kind);
    }

    /// Drop every pending validation alert
    pub fn cancel_validation(&mut self) {
        self.pending.retain(|&(k, _)| !k.is_validation());
    }

    /// Remove and return the alerts whose deadline has passed
    pub fn expire(&mut self, now: Instant) -> Vec<AlertKind> {
        let mut expired = Vec::new();
        self.pending.retain(|&(kind, deadline)| {
            if deadline <= now {
                expired.push(kind);
                false
            } else {
                true
            }
        });
        expired
    }

    #[must_use]
    pub fn is_active(&self, kind: AlertKind) -> bool {
        self.pending.iter().any(|&(k, _)| k == kind)
    }

    /// Most recently scheduled alert still showing
    #[must_use]
    pub fn current(&self) -> Option<AlertKind> {
        self.pending.last().map(|&(kind, _)| kind)
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
