//! Read-only commands over persisted data

use super::setup::{SecretChoice, prepare_game};
use crate::config::Config;
use crate::game::{GameController, GameStatus, MAX_GUESSES, share_text};
use crate::output::print_statistics;
use crate::storage::GameStore;
use anyhow::{Result, bail};

/// Print the statistics stored in `store`
pub fn run_stats<S: GameStore>(store: &S) {
    print_statistics(&store.load_statistics());
}

/// Share text for today's saved game
///
/// Only the daily game is saved, so practice secrets are refused.
///
/// # Errors
/// Returns an error for a non-daily `choice` or if the word lists fail to load.
pub fn run_share<S: GameStore>(
    config: &Config,
    choice: &SecretChoice,
    store: S,
) -> Result<String> {
    if *choice != SecretChoice::Daily {
        bail!("share only works for the daily game; drop --word/--random");
    }
    let game = prepare_game(config, choice)?;
    let controller = GameController::new(game.dictionary, store);
    Ok(share_or_notice(&controller, &config.title, game.index))
}

/// Share text for the controller's game, or a note explaining why there is none
#[must_use]
pub fn share_or_notice<S: GameStore>(
    controller: &GameController<S>,
    title: &str,
    index: i64,
) -> String {
    match controller.status() {
        GameStatus::InProgress => format!(
            "Today's game is not finished yet ({} of {MAX_GUESSES} guesses used).",
            controller.session().guesses().len()
        ),
        GameStatus::Won | GameStatus::Lost => {
            share_text(title, index, controller.session()).unwrap_or_default()
        }
    }
}
