//! Log setup
//!
//! Logs go to `wordle.log` in the data directory so they never draw over the
//! TUI. The filter comes from `WORDLE_LOG` (e.g. `WORDLE_LOG=debug`), default
//! `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORDLE_LOG";
pub const LOG_FILE: &str = "wordle.log";

/// Install the global subscriber; later calls are ignored
pub fn init(data_dir: &Path) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file = fs::create_dir_all(data_dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(data_dir.join(LOG_FILE))
    });

    let result = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(dir = %data_dir.display(), "logging initialised");
    }
}
