//! Persistence collaborator
//!
//! The game persists two things: the current session, scoped to one secret
//! word, and the running statistics. Stores read missing or unreadable data
//! as absent rather than failing.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::game::Statistics;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Persisted form of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub solution: String,
    pub guesses: Vec<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode game data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load/save of the session record and statistics
pub trait GameStore {
    fn load_session(&self) -> Option<SessionRecord>;

    /// # Errors
    /// Returns `StoreError` if the record cannot be written.
    fn save_session(&mut self, record: &SessionRecord) -> Result<(), StoreError>;

    fn load_statistics(&self) -> Statistics;

    /// # Errors
    /// Returns `StoreError` if the statistics cannot be written.
    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}
