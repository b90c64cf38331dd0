//! Daily solution selection
//!
//! The secret rotates once per local calendar day through the answer list,
//! counted from a fixed epoch date.

use crate::core::Word;
use chrono::{Local, NaiveDate};
use rand::seq::IndexedRandom;

/// Today's secret and where it sits in the rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWord {
    pub word: Word,
    /// Days since the epoch; shown in share text
    pub index: i64,
    /// Date the next word becomes available
    pub next_date: NaiveDate,
}

/// First day of the rotation unless configured otherwise
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 2, 8).unwrap_or_default()
}

/// Pick the word for `today`
///
/// Dates before the epoch wrap around the list rather than fail. Returns
/// `None` only when `answers` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::Word;
/// use wordle_daily::wordlists::daily::word_of_day;
///
/// let answers = vec![Word::new("apple").unwrap(), Word::new("grape").unwrap()];
/// let epoch = NaiveDate::from_ymd_opt(2022, 2, 8).unwrap();
/// let today = NaiveDate::from_ymd_opt(2022, 2, 9).unwrap();
///
/// let daily = word_of_day(&answers, epoch, today).unwrap();
/// assert_eq!(daily.word.text(), "GRAPE");
/// assert_eq!(daily.index, 1);
/// ```
#[must_use]
pub fn word_of_day(answers: &[Word], epoch: NaiveDate, today: NaiveDate) -> Option<DailyWord> {
    if answers.is_empty() {
        return None;
    }

    let index = today.signed_duration_since(epoch).num_days();
    let slot = index.rem_euclid(answers.len() as i64) as usize;
    let next_date = today.succ_opt().unwrap_or(today);

    Some(DailyWord {
        word: answers[slot].clone(),
        index,
        next_date,
    })
}

/// Pick the word for the current local date
#[must_use]
pub fn word_of_today(answers: &[Word], epoch: NaiveDate) -> Option<DailyWord> {
    word_of_day(answers, epoch, Local::now().date_naive())
}

/// Pick a random answer for a practice game
#[must_use]
pub fn random_word(answers: &[Word]) -> Option<Word> {
    answers.choose(&mut rand::rng()).cloned()
}
