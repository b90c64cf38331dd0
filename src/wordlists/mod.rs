//! Word lists for the game
//!
//! Embedded lists compiled into the binary, file loaders for custom lists,
//! the [`Dictionary`] collaborator and daily solution selection.

pub mod daily;
mod dictionary;
pub mod loader;

pub use dictionary::{Dictionary, WordList};

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Letter count of the bundled lists
pub const WORD_LENGTH: usize = 5;
