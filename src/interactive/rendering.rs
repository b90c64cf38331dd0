//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard, alert line and modals. Nothing here mutates
//! game state.

use super::app::{App, Modal};
use crate::core::LetterStatus;
use crate::game::{AlertKind, GameStatus, MAX_GUESSES, Session, Statistics};
use crate::output::formatters::{alert_message, create_progress_bar};
use crate::storage::GameStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: GameStore>(f: &mut Frame, app: &App<S>) {
    let grid_height = (MAX_GUESSES * 2 + 1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(3),           // Alert
            Constraint::Length(grid_height), // Grid
            Constraint::Length(5),           // Keyboard
            Constraint::Min(0),              // Spacer
            Constraint::Length(1),           // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_alert(f, app, chunks[1]);
    render_grid(f, app.controller.session(), chunks[2]);
    render_keyboard(f, app.controller.session(), chunks[3]);
    render_help(f, chunks[5]);

    match app.modal {
        Some(Modal::Win) => render_win_modal(f, app),
        Some(Modal::Stats) => render_stats_modal(f, app.controller.statistics(), app),
        Some(Modal::Info) => render_info_modal(f),
        None => {}
    }
}

fn render_header<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = if app.practice {
        format!("🎲 {} - Practice", app.title.to_uppercase())
    } else {
        format!("🟩 {} #{}", app.title.to_uppercase(), app.index)
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_alert<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(kind) = app.controller.alerts().current() else {
        return;
    };

    let color = match kind {
        AlertKind::ShareComplete => Color::Green,
        AlertKind::GameLost => Color::Red,
        AlertKind::NotEnoughLetters | AlertKind::WordNotFound => Color::Yellow,
    };
    let message = alert_message(kind, app.controller.session().secret());

    let alert = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(alert, area);
}

const fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style.add_modifier(Modifier::BOLD))
}

/// Rows of the grid: committed guesses, the active row, then empty rows
fn grid_lines(session: &Session) -> Vec<Line<'static>> {
    let width = session.word_length();
    let empty = Style::default().fg(Color::DarkGray);
    let typed = Style::default().fg(Color::White).bg(Color::Gray);
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for (guess, pattern) in session.evaluations() {
        let spans: Vec<Span> = guess
            .letters()
            .iter()
            .zip(pattern.statuses())
            .flat_map(|(&letter, &status)| [tile(letter, status_style(status)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if session.status() == GameStatus::InProgress {
        let current: Vec<char> = session.current_guess().chars().collect();
        let spans: Vec<Span> = (0..width)
            .flat_map(|i| {
                let cell = current
                    .get(i)
                    .map_or_else(|| tile('·', empty), |&c| tile(c, typed));
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    while lines.len() < MAX_GUESSES * 2 {
        let spans: Vec<Span> = (0..width)
            .flat_map(|_| [tile('·', empty), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

fn render_grid(f: &mut Frame, session: &Session, area: Rect) {
    let grid = Paragraph::new(grid_lines(session)).alignment(Alignment::Center);
    f.render_widget(grid, area);
}

fn keyboard_lines(statuses: &FxHashMap<char, LetterStatus>) -> Vec<Line<'static>> {
    let unused = Style::default().fg(Color::White).bg(Color::Black);

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let style = statuses.get(&key).copied().map_or(unused, status_style);
                    tile(key, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if let Some(last) = lines.last_mut() {
        last.spans.insert(0, Span::styled("⏎ ", unused));
        last.spans.push(Span::styled(" ⌫", unused));
    }
    lines
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(&session.letter_statuses()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Keyboard "),
        );
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Type letters | Enter: Submit | ⌫: Delete | Tab: Stats | ?: Help | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Centered rectangle of the given percentage size
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_modal(f: &mut Frame, title: &str, lines: Vec<Line>, color: Color) {
    let area = centered_rect(60, 60, f.area());
    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

fn render_win_modal<S: GameStore>(f: &mut Frame, app: &App<S>) {
    let attempts = app.controller.session().guesses().len();
    let celebration = match attempts {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        _ => "😅 PHEW! Got it in six! 😅",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            celebration,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(grid_lines(app.controller.session()).into_iter().take(attempts * 2));
    if let Some(next) = app.next_date {
        lines.push(Line::from(format!("Next word: {next}")));
    }
    lines.push(Line::default());
    lines.push(Line::from("s: Share | Tab: Stats | Esc: Close"));

    render_modal(f, "You won!", lines, Color::Green);
}

fn stats_lines(stats: &Statistics, highlight: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Win %: {}   Streak: {}   Best: {}",
            stats.total_games,
            stats.success_rate(),
            stats.current_streak,
            stats.best_streak
        )),
        Line::default(),
        Line::from("Guess distribution"),
    ];

    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let style = if highlight == Some(i) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let bar = create_progress_bar(f64::from(count), max, 24);
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled(bar, style),
            Span::raw(format!(" {count}")),
        ]));
    }
    lines.push(Line::from(format!("X: {}", stats.games_failed)));
    lines
}

fn render_stats_modal<S: GameStore>(f: &mut Frame, stats: &Statistics, app: &App<S>) {
    let session = app.controller.session();
    let highlight = (session.status() == GameStatus::Won).then(|| session.guesses().len() - 1);
    let mut lines = stats_lines(stats, highlight);
    lines.push(Line::default());
    lines.push(Line::from("Tab/Esc: Close"));

    render_modal(f, "Statistics", lines, Color::Cyan);
}

/// How-to-play text followed by the about section
fn info_lines() -> Vec<Line<'static>> {
    let correct = status_style(LetterStatus::Correct);
    let present = status_style(LetterStatus::Present);
    let absent = status_style(LetterStatus::Absent);

    vec![
        Line::from(format!("Guess the word in {MAX_GUESSES} tries.")),
        Line::from("Each guess must be a valid word. Press Enter to submit."),
        Line::from("After each guess the tiles change color:"),
        Line::default(),
        Line::from(vec![
            tile('W', correct),
            Span::raw(" "),
            tile('E', absent),
            Span::raw(" "),
            tile('A', absent),
            Span::raw(" "),
            tile('R', absent),
            Span::raw(" "),
            tile('Y', absent),
            Span::raw("  W is in the word and in the correct spot"),
        ]),
        Line::from(vec![
            tile('P', absent),
            Span::raw(" "),
            tile('I', present),
            Span::raw(" "),
            tile('L', absent),
            Span::raw(" "),
            tile('O', absent),
            Span::raw(" "),
            tile('T', absent),
            Span::raw("  I is in the word but in the wrong spot"),
        ]),
        Line::from(vec![
            tile('V', absent),
            Span::raw(" "),
            tile('A', absent),
            Span::raw(" "),
            tile('G', absent),
            Span::raw(" "),
            tile('U', absent),
            Span::raw(" "),
            tile('E', absent),
            Span::raw("  no letter is in the word"),
        ]),
        Line::default(),
        Line::from("A new word is available every day."),
        Line::default(),
        Line::from(Span::styled(
            "About",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(concat!(
            "A terminal take on Wordle, the daily word game by Josh Wardle. ",
            "Version ",
            env!("CARGO_PKG_VERSION"),
            "."
        )),
        Line::from("Bring your own word lists with --answers and --allowed."),
        Line::default(),
        Line::from("Esc: Close"),
    ]
}

fn render_info_modal(f: &mut Frame) {
    render_modal(f, "How to play", info_lines(), Color::White);
}
