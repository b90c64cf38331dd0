use super::{GameStore, SessionRecord, StoreError};
use crate::game::Statistics;
use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SESSION_FILE: &str = "session.json";
const STATISTICS_FILE: &str = "statistics.json";

/// JSON files in a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Platform data directory, or the working directory if none is known
    #[must_use]
    pub fn default_dir() -> PathBuf {
        ProjectDirs::from("", "", "wordle_daily")
            .map_or_else(|| PathBuf::from("."), |dirs| dirs.data_local_dir().to_path_buf())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not read game data");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt game data");
                None
            }
        }
    }

    /// Replace `name` atomically: a temp file in the same directory is
    /// renamed over the target, so an interrupted save leaves the old file
    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_vec_pretty(value)?;
        let path = self.dir.join(name);

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(&data)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|err| err.error)?;
        tracing::debug!(path = %path.display(), "saved game data");
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl GameStore for FileStore {
    fn load_session(&self) -> Option<SessionRecord> {
        self.read(SESSION_FILE)
    }

    fn save_session(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        self.write(SESSION_FILE, record)
    }

    fn load_statistics(&self) -> Statistics {
        self.read(STATISTICS_FILE).unwrap_or_default()
    }

    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.write(STATISTICS_FILE, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOutcome;
    use tempfile::tempdir;

    #[test]
    fn missing_files_read_as_absent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.load_session().is_none());
        assert_eq!(store.load_statistics(), Statistics::default());
    }

    #[test]
    fn session_roundtrip_creates_directory() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));
        let record = SessionRecord {
            solution: "APPLE".into(),
            guesses: vec!["GRAPE".into()],
        };

        store.save_session(&record).unwrap();
        assert_eq!(store.load_session(), Some(record));
    }

    #[test]
    fn statistics_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let mut stats = Statistics::default();
        stats.record(GameOutcome::Won { attempts: 4 });

        store.save_statistics(&stats).unwrap();
        assert_eq!(store.load_statistics(), stats);
    }

    #[test]
    fn saves_replace_in_place_without_leftovers() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let mut stats = Statistics::default();
        stats.record(GameOutcome::Won { attempts: 2 });
        store.save_statistics(&stats).unwrap();

        stats.record(GameOutcome::Lost);
        store.save_statistics(&stats).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![STATISTICS_FILE]);
        assert_eq!(store.load_statistics().total_games, 2);
    }

    #[test]
    fn corrupt_files_read_as_absent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE), b"{not json").unwrap();
        fs::write(dir.path().join(STATISTICS_FILE), b"[1, 2").unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.load_session().is_none());
        assert_eq!(store.load_statistics(), Statistics::default());
    }
}
