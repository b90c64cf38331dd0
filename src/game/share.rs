//! Shareable result text

use super::session::{GameStatus, MAX_GUESSES, Session};

/// Result summary with an emoji grid, or `None` while the game is running
///
/// ```text
/// Wordle 12 3/6
///
/// ⬜🟨⬜⬜🟩
/// 🟩⬜🟩⬜🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(title: &str, index: i64, session: &Session) -> Option<String> {
    let score = match session.status() {
        GameStatus::InProgress => return None,
        GameStatus::Won => session.guesses().len().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let grid: Vec<String> = session
        .evaluations()
        .iter()
        .map(|(_, pattern)| pattern.to_emoji())
        .collect();

    Some(format!(
        "{title} {index} {score}/{MAX_GUESSES}\n\n{}",
        grid.join("\n")
    ))
}
