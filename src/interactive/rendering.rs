//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard, and the status line. All
//! content comes from the session's read-only queries.

use super::app::App;
use crate::core::{LetterState, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameStatus, KeyFeedback, Notice};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(5),                      // Keyboard
            Constraint::Length(3),                      // Status
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE — guess the word in six tries")
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

/// Cell style lookup: one closed mapping from letter state to colors
const fn cell_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterState::Guessed => Style::new().fg(Color::White),
        LetterState::Blank => Style::new().fg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let (cursor_row, cursor_col) = app.session.cursor();

    let lines: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for col in 0..WORD_LENGTH {
                let state = app.session.state_at(row, col);
                let ch = app
                    .session
                    .letter_at(row, col)
                    .map_or('·', |c| c.to_ascii_uppercase());

                let mut style = cell_style(state);
                if !app.session.is_over() && (row, col) == (cursor_row, cursor_col) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }

                spans.push(Span::styled(format!(" {ch} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

const fn key_style(feedback: KeyFeedback) -> Style {
    match feedback {
        KeyFeedback::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyFeedback::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyFeedback::Absent => Style::new().fg(Color::DarkGray),
        KeyFeedback::Unknown => Style::new().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let feedback = app.session.key_feedback(ch);
                    Span::styled(
                        format!(" {} ", ch.to_ascii_uppercase()),
                        key_style(feedback),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.session.notice() {
        Some(notice @ Notice::NotAWord(_)) => (
            notice.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(notice @ Notice::Won) => (
            format!("{notice}  —  press N for a new game, Q to quit"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(notice @ Notice::Lost(_)) => (
            format!("{notice}  —  press N for a new game, Q to quit"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => match app.session.status() {
            GameStatus::InProgress => (
                "Type a guess · Enter submits · Backspace deletes · Esc quits".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            _ => (
                "Press N for a new game, Q to quit".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
