//! Running statistics across sessions

use super::session::{GameOutcome, MAX_GUESSES};
use serde::{Deserialize, Serialize};

/// Aggregate counters, updated once per finished session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Wins by guess count; index 0 is a first-guess win
    pub win_distribution: [u32; MAX_GUESSES],
    pub games_failed: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_games: u32,
}

impl Statistics {
    /// Fold one finished game into the tally
    pub fn record(&mut self, outcome: GameOutcome) {
        self.total_games += 1;
        match outcome {
            GameOutcome::Won { attempts } => {
                let slot = attempts.clamp(1, MAX_GUESSES) - 1;
                self.win_distribution[slot] += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            GameOutcome::Lost => {
                self.games_failed += 1;
                self.current_streak = 0;
            }
        }
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.win_distribution.iter().sum()
    }

    /// Rounded percentage of games won; 0 before any game
    #[must_use]
    pub fn success_rate(&self) -> u32 {
        if self.total_games == 0 {
            return 0;
        }
        let won = f64::from(self.total_games.saturating_sub(self.games_failed));
        (100.0 * won / f64::from(self.total_games)).round() as u32
    }

    /// Largest bucket of the win distribution
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.win_distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.success_rate(), 0);
        assert_eq!(stats.games_won(), 0);
    }

    #[test]
    fn win_increments_bucket_and_streak() {
        let mut stats = Statistics::default();
        stats.record(GameOutcome::Won { attempts: 1 });
        stats.record(GameOutcome::Won { attempts: 3 });

        assert_eq!(stats.win_distribution, [1, 0, 1, 0, 0, 0]);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.success_rate(), 100);
    }

    #[test]
    fn sixth_guess_win_is_not_a_loss() {
        let mut stats = Statistics::default();
        stats.record(GameOutcome::Won { attempts: 6 });

        assert_eq!(stats.win_distribution[5], 1);
        assert_eq!(stats.games_failed, 0);
    }

    #[test]
    fn loss_resets_streak_but_keeps_best() {
        let mut stats = Statistics::default();
        stats.record(GameOutcome::Won { attempts: 2 });
        stats.record(GameOutcome::Won { attempts: 4 });
        stats.record(GameOutcome::Lost);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.games_failed, 1);
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.success_rate(), 67);
    }

    #[test]
    fn deserializes_partial_json() {
        let stats: Statistics = serde_json::from_str(r#"{"total_games": 4}"#).unwrap();
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.win_distribution, [0; MAX_GUESSES]);
    }
}
