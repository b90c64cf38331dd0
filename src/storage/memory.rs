use super::{GameStore, SessionRecord, StoreError};
use crate::game::Statistics;

/// Store that keeps everything in memory; used by tests and practice games
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub session: Option<SessionRecord>,
    pub statistics: Statistics,
    /// Number of successful `save_statistics` calls
    pub statistics_saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(record: SessionRecord) -> Self {
        Self {
            session: Some(record),
            ..Self::default()
        }
    }
}

impl GameStore for MemoryStore {
    fn load_session(&self) -> Option<SessionRecord> {
        self.session.clone()
    }

    fn save_session(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        self.session = Some(record.clone());
        Ok(())
    }

    fn load_statistics(&self) -> Statistics {
        self.statistics.clone()
    }

    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.statistics = stats.clone();
        self.statistics_saves += 1;
        Ok(())
    }
}
