//! Word list loading and secret selection shared by every command

use crate::config::Config;
use crate::core::Word;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS, WORD_LENGTH, WordList, daily};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

/// How the secret is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretChoice {
    /// Today's word from the rotation
    Daily,
    /// A word given on the command line, played as practice
    Fixed(String),
    /// Random practice word
    Random,
}

/// Everything a command needs to start a game
#[derive(Debug, Clone)]
pub struct PreparedGame {
    pub dictionary: WordList,
    /// Day number shown in share text
    pub index: i64,
    /// Practice games keep statistics but never replace the saved session
    pub practice: bool,
    /// When the next daily word arrives
    pub next_date: Option<NaiveDate>,
}

/// Load answer and accepted-guess lists
///
/// Returns (`answers`, `accepted`); bundled lists are used unless the config
/// names custom files. Answers are always accepted.
///
/// # Errors
/// Returns an error if a custom list cannot be read or yields no answers.
pub fn load_wordlists(config: &Config) -> Result<(Vec<Word>, Vec<Word>)> {
    let length = if config.answers.is_some() || config.allowed.is_some() {
        config.word_length
    } else {
        WORD_LENGTH
    };

    let answers = match &config.answers {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("reading answer list {}", path.display()))?,
        None => words_from_slice(ANSWERS, length),
    };
    if answers.is_empty() {
        bail!("answer list contains no {length}-letter words");
    }

    let mut accepted = match &config.allowed {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("reading allowed list {}", path.display()))?,
        None => words_from_slice(ALLOWED, length),
    };
    accepted.extend(answers.iter().cloned());

    tracing::info!(
        answers = answers.len(),
        accepted = accepted.len(),
        "word lists loaded"
    );
    Ok((answers, accepted))
}

/// Pick the secret and build the dictionary around it
///
/// # Errors
/// Returns an error if the word lists cannot be loaded or a fixed word is not
/// an accepted word of the right length.
pub fn prepare_game(config: &Config, choice: &SecretChoice) -> Result<PreparedGame> {
    let (answers, accepted) = load_wordlists(config)?;
    let length = answers.first().map_or(WORD_LENGTH, Word::len);

    let (secret, index, practice, next_date) = match choice {
        SecretChoice::Daily => {
            let today = daily::word_of_today(&answers, config.epoch)
                .context("answer list is empty")?;
            (today.word, today.index, false, Some(today.next_date))
        }
        SecretChoice::Fixed(text) => {
            let word = Word::with_length(text, length)
                .with_context(|| format!("'{text}' cannot be the secret"))?;
            if !accepted.contains(&word) {
                bail!("'{word}' is not in the word list");
            }
            let index = answers.iter().position(|w| *w == word).unwrap_or(0) as i64;
            (word, index, true, None)
        }
        SecretChoice::Random => {
            let word = daily::random_word(&answers).context("answer list is empty")?;
            (word, 0, true, None)
        }
    };

    tracing::debug!(index, practice, "secret selected");
    Ok(PreparedGame {
        dictionary: WordList::new(secret, accepted),
        index,
        practice,
        next_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bundled_lists_load() {
        let (answers, accepted) = load_wordlists(&Config::default()).unwrap();
        assert_eq!(answers.len(), ANSWERS.len());
        assert!(accepted.len() >= ALLOWED.len());
    }

    #[test]
    fn fixed_word_becomes_secret() {
        let game =
            prepare_game(&Config::default(), &SecretChoice::Fixed("apple".into())).unwrap();
        assert_eq!(game.dictionary.solution().text(), "APPLE");
        assert!(game.practice);
        assert_eq!(game.index, 0);
    }

    #[test]
    fn fixed_word_must_be_known() {
        let choice = SecretChoice::Fixed("qqqqq".into());
        assert!(prepare_game(&Config::default(), &choice).is_err());

        let short = SecretChoice::Fixed("app".into());
        assert!(prepare_game(&Config::default(), &short).is_err());
    }

    #[test]
    fn random_game_is_practice() {
        let game = prepare_game(&Config::default(), &SecretChoice::Random).unwrap();
        assert!(game.practice);
        assert!(game.dictionary.is_accepted(game.dictionary.solution()));
    }

    #[test]
    fn custom_lists_use_configured_length() {
        let dir = tempdir().unwrap();
        let answers = dir.path().join("answers.txt");
        fs::write(&answers, "kiwi\npear\napple\n").unwrap();

        let config = Config {
            answers: Some(answers),
            word_length: 4,
            ..Config::default()
        };
        let game = prepare_game(&config, &SecretChoice::Fixed("pear".into())).unwrap();
        assert_eq!(game.dictionary.word_length(), 4);
        assert!(game.dictionary.is_accepted(&Word::new("kiwi").unwrap()));
    }

    #[test]
    fn empty_custom_answers_fail() {
        let dir = tempdir().unwrap();
        let answers = dir.path().join("answers.txt");
        fs::write(&answers, "# nothing here\n").unwrap();

        let config = Config {
            answers: Some(answers),
            ..Config::default()
        };
        assert!(load_wordlists(&config).is_err());
    }
}
