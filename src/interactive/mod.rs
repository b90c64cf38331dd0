//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Modal, run_tui};
