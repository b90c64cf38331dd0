//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Alerts are printed immediately, so their
//! timers never matter here.

use crate::game::{GameController, GameStatus, MAX_GUESSES, Signal};
use crate::output::formatters::alert_message;
use crate::output::{print_board, print_statistics};
use crate::storage::GameStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// Returns the share text once the game is over, or `None` if the player quit
/// early.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<S: GameStore>(
    controller: &mut GameController<S>,
    title: &str,
    index: i64,
) -> Result<Option<String>> {
    let stdin = io::stdin();
    run_simple_with(controller, title, index, &mut stdin.lock())
}

/// Same as [`run_simple`] but reading guesses from any buffered reader
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple_with<S: GameStore, R: BufRead>(
    controller: &mut GameController<S>,
    title: &str,
    index: i64,
    input: &mut R,
) -> Result<Option<String>> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", format!("{title} - Simple Mode"));
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {MAX_GUESSES} tries.",
        controller.word_length()
    );
    println!("Commands: 'stats' to show statistics, 'quit' to exit\n");

    if !controller.session().guesses().is_empty() {
        println!("Resuming today's game:");
        print_board(controller.session());
    }

    while controller.status() == GameStatus::InProgress {
        let turn = controller.session().guesses().len() + 1;
        let Some(line) = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"), input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(None);
            }
            "stats" => {
                print_statistics(controller.statistics());
                continue;
            }
            _ => {}
        }

        if line.chars().count() > controller.word_length() {
            println!(
                "❌ {}\n",
                format!("Only {} letters fit", controller.word_length()).yellow()
            );
            continue;
        }

        let now = Instant::now();
        while !controller.session().current_guess().is_empty() {
            controller.delete_char(now);
        }
        for c in line.chars() {
            controller.append_char(c, now);
        }

        for signal in controller.commit_guess(now) {
            match signal {
                Signal::Alert(kind) => {
                    let message = alert_message(kind, controller.session().secret());
                    println!("❌ {}\n", message.yellow());
                }
                Signal::GuessCommitted { .. } => print_board(controller.session()),
                Signal::Completed(_) => {}
            }
        }
    }

    tracing::debug!(status = ?controller.status(), "simple mode finished");

    let share = controller.share(title, index, Instant::now());
    if let Some(text) = &share {
        println!("{text}\n");
    }
    print_statistics(controller.statistics());
    Ok(share)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
