//! Terminal output formatting
//!
//! Display utilities for the simple mode and the report commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_statistics};
