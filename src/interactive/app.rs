//! TUI application state and event loop

use crate::game::{GameController, GameOutcome, GameStatus, Signal};
use crate::storage::GameStore;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Poll interval while no alert is pending
const IDLE_POLL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Win,
    Stats,
    Info,
}

/// Application state
pub struct App<S: GameStore> {
    pub controller: GameController<S>,
    pub title: String,
    pub index: i64,
    pub practice: bool,
    pub next_date: Option<NaiveDate>,
    pub modal: Option<Modal>,
    /// Share text to print once the terminal is restored
    pub shared: Option<String>,
    pub should_quit: bool,
}

impl<S: GameStore> App<S> {
    /// Wrap a controller; a resumed won game opens straight into the win modal
    #[must_use]
    pub fn new(controller: GameController<S>, title: impl Into<String>, index: i64) -> Self {
        let modal = (controller.status() == GameStatus::Won).then_some(Modal::Win);
        Self {
            controller,
            title: title.into(),
            index,
            practice: false,
            next_date: None,
            modal,
            shared: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_practice(mut self, practice: bool) -> Self {
        self.practice = practice;
        self
    }

    #[must_use]
    pub fn with_next_date(mut self, next_date: Option<NaiveDate>) -> Self {
        self.next_date = next_date;
        self
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.modal {
            Some(modal) => self.handle_modal_key(modal, key.code, now),
            None => self.handle_game_key(key.code, now),
        }
    }

    fn handle_modal_key(&mut self, modal: Modal, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.modal = None,
            KeyCode::Tab => {
                self.modal = if modal == Modal::Stats {
                    None
                } else {
                    Some(Modal::Stats)
                };
            }
            KeyCode::Char('s' | 'S') if modal == Modal::Win => self.share(now),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode, now: Instant) {
        let signals = match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.modal = Some(Modal::Stats);
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.modal = Some(Modal::Info);
                return;
            }
            KeyCode::Char(c) if c.is_alphabetic() => self.controller.append_char(c, now),
            KeyCode::Backspace => self.controller.delete_char(now),
            KeyCode::Enter => self.controller.commit_guess(now),
            _ => return,
        };

        for signal in signals {
            if let Signal::Completed(GameOutcome::Won { .. }) = signal {
                self.modal = Some(Modal::Win);
            }
        }
    }

    fn share(&mut self, now: Instant) {
        if let Some(text) = self.controller.share(&self.title, self.index, now) {
            self.shared = Some(text);
            self.modal = None;
        }
    }

    /// Expire alerts that are due
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// How long the event loop may wait for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .alerts()
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }
}

/// Run the TUI application
///
/// Returns the share text produced during the session, if any.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore>(app: App<S>) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: GameStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app.shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::AlertKind;
    use crate::storage::{MemoryStore, SessionRecord};
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> WordList {
        WordList::new(
            Word::new("apple").unwrap(),
            words_from_slice(&["grape", "melon"], 5),
        )
    }

    fn app() -> App<MemoryStore> {
        App::new(GameController::new(dictionary(), MemoryStore::new()), "Wordle", 5)
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App<MemoryStore>, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn winning_opens_win_modal_and_share_works() {
        let now = Instant::now();
        let mut app = app();
        type_word(&mut app, "apple", now);
        assert_eq!(app.modal, Some(Modal::Win));

        press(&mut app, KeyCode::Char('s'), now);
        assert!(app.modal.is_none());
        assert!(app.shared.as_deref().unwrap().starts_with("Wordle 5 1/6"));
        assert_eq!(
            app.controller.alerts().current(),
            Some(AlertKind::ShareComplete)
        );
    }

    #[test]
    fn resumed_win_opens_win_modal() {
        let store = MemoryStore::with_session(SessionRecord {
            solution: "APPLE".into(),
            guesses: vec!["APPLE".into()],
        });
        let app = App::new(GameController::new(dictionary(), store), "Wordle", 0);
        assert_eq!(app.modal, Some(Modal::Win));
    }

    #[test]
    fn keys_are_ignored_while_modal_open() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.modal, Some(Modal::Stats));

        press(&mut app, KeyCode::Char('a'), now);
        assert_eq!(app.controller.session().current_guess(), "");

        press(&mut app, KeyCode::Esc, now);
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn digits_are_not_typed() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.controller.session().current_guess(), "");
    }

    #[test]
    fn poll_timeout_tracks_alert_deadline() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(
            app.controller.alerts().current(),
            Some(AlertKind::NotEnoughLetters)
        );
        assert_eq!(app.poll_timeout(now + Duration::from_millis(2500)), Duration::from_millis(500));

        app.tick(now + Duration::from_secs(3));
        assert!(app.controller.alerts().is_empty());
    }

    #[test]
    fn escape_quits_and_ctrl_c_always_quits() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Esc, now);
        assert!(app.should_quit);

        let mut app = self::app();
        press(&mut app, KeyCode::Char('?'), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(app.should_quit);
    }
}
