//! Terminal rendering for the countdown timer.
//!
//! Draws the whole widget from a [`TimerState`] snapshot:
//! - Mode selector tabs with the active mode highlighted
//! - The `MM:SS` countdown clock
//! - A run/pause/finished status line
//! - A proportional progress gauge
//! - Transport key hints

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs};
use ratatui::Frame;

use crate::types::{Mode, TimerState};

/// Formats remaining seconds as `MM:SS`, both fields zero-padded.
///
/// Durations beyond 99:59 are not representable with the three presets.
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Returns the accent color for a mode.
fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::LightRed,
        Mode::ShortBreak => Color::LightGreen,
        Mode::LongBreak => Color::LightBlue,
    }
}

/// Returns the status line for the current state.
fn status_label(state: &TimerState) -> (&'static str, Color) {
    if state.is_running {
        ("RUNNING", Color::Green)
    } else if state.is_completed() {
        ("FINISHED", Color::Magenta)
    } else {
        ("PAUSED", Color::Yellow)
    }
}

/// Draws the entire widget into `frame`.
pub fn render(frame: &mut Frame, state: &TimerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // mode selector
            Constraint::Min(1),    // countdown
            Constraint::Length(3), // key hints
        ])
        .split(frame.size());

    render_mode_selector(frame, state, chunks[0]);
    render_countdown(frame, state, chunks[1]);
    render_key_hints(frame, chunks[2]);
}

/// Draws the three mode tabs, highlighting the active one.
fn render_mode_selector(frame: &mut Frame, state: &TimerState, area: ratatui::layout::Rect) {
    let titles: Vec<Line> = Mode::ALL.iter().map(|m| Line::from(m.label())).collect();

    let tabs = Tabs::new(titles)
        .select(state.mode.index())
        .highlight_style(
            Style::default()
                .fg(mode_color(state.mode))
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" pomotui "),
        );
    frame.render_widget(tabs, area);
}

/// Draws the clock, status line, and progress gauge.
fn render_countdown(frame: &mut Frame, state: &TimerState, area: ratatui::layout::Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(1), // mode label
            Constraint::Length(1),
            Constraint::Length(1), // clock
            Constraint::Length(1),
            Constraint::Length(1), // status
            Constraint::Length(1),
            Constraint::Length(3), // progress gauge
            Constraint::Min(1),    // bottom padding
        ])
        .split(area);

    let accent = mode_color(state.mode);

    let mode_label = Paragraph::new(state.mode.label())
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(mode_label, sections[1]);

    let clock = Paragraph::new(format_clock(state.remaining_seconds))
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(clock, sections[3]);

    let (label, color) = status_label(state);
    let status = Paragraph::new(label)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, sections[5]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(state.progress());
    frame.render_widget(gauge, sections[7]);
}

/// Draws the transport key hints.
fn render_key_hints(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hints = Line::from(vec![
        Span::styled("1/2/3", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" mode  "),
        Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" start/pause  "),
        Span::styled("R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" reset  "),
        Span::styled("Q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]);

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
