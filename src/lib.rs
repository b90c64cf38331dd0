//! Daily word-guessing game
//!
//! Guess the secret word in six tries. The core is a pure state machine over
//! a [`game::Session`]; the terminal frontends and file persistence sit
//! around it.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use wordle_daily::core::Word;
//! use wordle_daily::game::{GameController, GameStatus};
//! use wordle_daily::storage::MemoryStore;
//! use wordle_daily::wordlists::{ALLOWED, WordList, loader::words_from_slice};
//!
//! let dictionary = WordList::new(Word::new("apple").unwrap(), words_from_slice(ALLOWED, 5));
//! let mut game = GameController::new(dictionary, MemoryStore::new());
//!
//! let now = Instant::now();
//! for c in "apple".chars() {
//!     game.append_char(c, now);
//! }
//! game.commit_guess(now);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine, statistics and alerts
pub mod game;

// Word lists and the dictionary
pub mod wordlists;

// Session and statistics persistence
pub mod storage;

// Configuration file
pub mod config;

// Log setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
