//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row};
use crate::game::{GameStatus, MAX_GUESSES, Session, Statistics};
use colored::Colorize;

/// Print the statistics tally with a win distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.total_games);
    println!(
        "   Win %:           {}",
        stats.success_rate().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Best streak:     {}", stats.best_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!("   X: {}", stats.games_failed.to_string().red());
}

/// Print every committed guess as colored tiles, then the outcome
pub fn print_board(session: &Session) {
    println!();
    for (guess, pattern) in session.evaluations() {
        println!("   {}", guess_row(&guess, &pattern));
    }
    for _ in session.guesses().len()..MAX_GUESSES {
        println!("   {}", " · ".repeat(session.word_length()).bright_black());
    }
    println!();

    match session.status() {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {}/{MAX_GUESSES}!", session.guesses().len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("💔 Out of guesses. The word was {}", session.secret())
                .red()
                .bold()
        ),
        GameStatus::InProgress => {}
    }
}
