//! Application wiring: terminal lifecycle, input handling, and the
//! render/event loop.
//!
//! The engine runs as its own task; this loop forwards key presses as
//! commands, redraws on every state snapshot, and restores the terminal on
//! all exit paths before any error propagates.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::Cli;
use crate::engine::{CountdownEngine, EngineHandle, TimerCommand, TimerEvent};
use crate::sound;
use crate::types::{Mode, TimerState};
use crate::ui;

// ============================================================================
// Key mapping
// ============================================================================

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app
    Quit,
    /// Forward a command to the countdown engine
    Command(TimerCommand),
}

/// Maps a key press to an action, if any.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::Command(TimerCommand::SwitchMode(Mode::Focus))),
        KeyCode::Char('2') => Some(Action::Command(TimerCommand::SwitchMode(Mode::ShortBreak))),
        KeyCode::Char('3') => Some(Action::Command(TimerCommand::SwitchMode(Mode::LongBreak))),
        KeyCode::Char(' ') => Some(Action::Command(TimerCommand::ToggleRun)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Command(TimerCommand::Reset)),
        _ => None,
    }
}

// ============================================================================
// App entry
// ============================================================================

/// Runs the timer until the user quits.
pub async fn run(cli: &Cli) -> Result<()> {
    let player = sound::create_player(cli.muted);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (engine, handle) = CountdownEngine::new(player, event_tx);

    let engine_task = tokio::spawn(engine.run());
    let logger_task = tokio::spawn(log_events(event_rx));

    enable_raw_mode().context("failed to enable raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = event_loop(&mut terminal, handle).await;

    // Restore the terminal before surfacing any loop error.
    disable_raw_mode().context("failed to disable raw terminal mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    // The loop dropped the engine handle, so both tasks wind down.
    engine_task
        .await
        .context("countdown engine task panicked")??;
    logger_task.await.context("event logger task panicked")?;

    result
}

/// Draws the UI and reacts to key presses and state changes.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut handle: EngineHandle,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut snapshot: TimerState = *handle.state.borrow();

    loop {
        terminal
            .draw(|frame| ui::render(frame, &snapshot))
            .context("failed to draw frame")?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match map_key(key) {
                            Some(Action::Quit) => break,
                            Some(Action::Command(command)) => {
                                handle
                                    .commands
                                    .send(command)
                                    .context("countdown engine is gone")?;
                            }
                            None => {}
                        }
                    }
                    // Resizes and other events just trigger the redraw above.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("terminal event stream failed"),
                    None => break,
                }
            }
            changed = handle.state.changed() => {
                if changed.is_err() {
                    break;
                }
                snapshot = *handle.state.borrow_and_update();
            }
        }
    }
    Ok(())
}

/// Logs engine events until the channel closes.
async fn log_events(mut events: mpsc::UnboundedReceiver<TimerEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            TimerEvent::Started {
                mode,
                remaining_seconds,
            } => info!(mode = mode.as_str(), remaining_seconds, "countdown started"),
            TimerEvent::Paused {
                mode,
                remaining_seconds,
            } => info!(mode = mode.as_str(), remaining_seconds, "countdown paused"),
            TimerEvent::ModeChanged { mode } => info!(mode = mode.as_str(), "mode selected"),
            TimerEvent::Reset { mode } => info!(mode = mode.as_str(), "countdown reset"),
            TimerEvent::Completed { mode } => info!(mode = mode.as_str(), "countdown completed"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
