//! Optional configuration file
//!
//! `config.json` in the platform config directory. Every field is optional;
//! command-line flags override whatever the file says.

use crate::storage::FileStore;
use crate::wordlists::{WORD_LENGTH, daily};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in the header and share text
    pub title: String,
    /// Custom answer list, one word per line
    pub answers: Option<PathBuf>,
    /// Custom accepted-guess list, one word per line
    pub allowed: Option<PathBuf>,
    /// Where sessions, statistics and the log live
    pub data_dir: Option<PathBuf>,
    /// First day of the daily rotation
    pub epoch: NaiveDate,
    /// Letter count for custom lists
    pub word_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Wordle".to_string(),
            answers: None,
            allowed: None,
            data_dir: None,
            epoch: daily::default_epoch(),
            word_length: WORD_LENGTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "wordle_daily").map_or_else(
            || PathBuf::from("wordle_config.json"),
            |dirs| dirs.config_dir().join("config.json"),
        )
    }

    /// Read the config at `path`; a missing file yields the defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolved data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(FileStore::default_dir)
    }
}
