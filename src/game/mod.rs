//! Game session lifecycle
//!
//! [`Session`] is the pure state machine, [`GameController`] wires it to a
//! dictionary, a store and the alert timers.

mod alerts;
mod controller;
mod session;
mod share;
mod stats;

pub use alerts::{AlertKind, AlertTimers, OUTCOME_ALERT_DELAY, VALIDATION_ALERT_DELAY};
pub use controller::GameController;
pub use session::{Event, GameOutcome, GameStatus, MAX_GUESSES, Session, Signal, Transition};
pub use share::share_text;
pub use stats::Statistics;
