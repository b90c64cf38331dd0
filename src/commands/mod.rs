//! Command implementations

pub mod report;
pub mod setup;
pub mod simple;

pub use report::{run_share, run_stats, share_or_notice};
pub use setup::{PreparedGame, SecretChoice, load_wordlists, prepare_game};
pub use simple::run_simple;
