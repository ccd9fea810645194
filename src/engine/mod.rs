//! Countdown engine for the timer.
//!
//! This module provides the core countdown behavior:
//! - The four operations (mode switch, run toggle, reset, tick)
//! - A one-second ticker driven by `tokio::time::interval_at`
//! - State snapshots over a watch channel for the UI
//! - Events for logging and the completion chime
//!
//! The ticker is owned by the engine as an `Option<Interval>`. Every
//! transition that stops the countdown (pause, mode switch, reset,
//! completion, shutdown) drops it, so at most one tick source exists and
//! no stale tick can decrement a new mode's countdown.

use std::future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::sound::SoundPlayer;
use crate::types::{Mode, TimerState};

/// Interval between countdown ticks.
const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// Commands & Events
// ============================================================================

/// User-initiated operations on the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Select a mode, stopping and resetting the countdown
    SwitchMode(Mode),
    /// Start or pause the countdown
    ToggleRun,
    /// Stop and restore the current mode's full duration
    Reset,
}

/// Engine events for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Active mode
        mode: Mode,
        /// Seconds left when it started
        remaining_seconds: u32,
    },
    /// Countdown paused
    Paused {
        /// Active mode
        mode: Mode,
        /// Seconds left when paused
        remaining_seconds: u32,
    },
    /// Active mode changed (countdown stopped and reset)
    ModeChanged {
        /// The newly selected mode
        mode: Mode,
    },
    /// Countdown reset to the current mode's full duration
    Reset {
        /// Active mode
        mode: Mode,
    },
    /// Countdown reached zero; the chime was attempted
    Completed {
        /// The mode that finished
        mode: Mode,
    },
}

// ============================================================================
// EngineHandle
// ============================================================================

/// The UI's side of the engine: a command inbox and a state feed.
#[derive(Debug)]
pub struct EngineHandle {
    /// Sends commands into the engine loop.
    pub commands: mpsc::UnboundedSender<TimerCommand>,
    /// Receives a snapshot after every state change.
    pub state: watch::Receiver<TimerState>,
}

// ============================================================================
// CountdownEngine
// ============================================================================

/// Owns the timer state and drives it in real time.
pub struct CountdownEngine {
    /// Current session state
    state: TimerState,
    /// The armed ticker; `None` whenever the countdown is not running
    ticker: Option<Interval>,
    /// Command inbox from the UI
    command_rx: mpsc::UnboundedReceiver<TimerCommand>,
    /// State snapshot broadcast
    state_tx: watch::Sender<TimerState>,
    /// Event sender for logging and tests
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    /// Completion chime capability; play results are discarded
    sound: Arc<dyn SoundPlayer + Send + Sync>,
}

impl CountdownEngine {
    /// Creates an engine plus the handle the UI drives it with.
    pub fn new(
        sound: Arc<dyn SoundPlayer + Send + Sync>,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> (Self, EngineHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(TimerState::new());

        let engine = Self {
            state: TimerState::new(),
            ticker: None,
            command_rx,
            state_tx,
            event_tx,
            sound,
        };
        let handle = EngineHandle {
            commands: command_tx,
            state: state_rx,
        };
        (engine, handle)
    }

    /// Runs the engine loop until the command channel closes.
    ///
    /// Should be spawned as its own tokio task. Dropping the
    /// [`EngineHandle`] shuts the loop down, which also drops any armed
    /// ticker.
    pub async fn run(mut self) -> Result<()> {
        loop {
            tokio::select! {
                maybe_cmd = self.command_rx.recv() => {
                    let Some(command) = maybe_cmd else { break };
                    self.apply(command)?;
                }
                _ = Self::next_tick(&mut self.ticker) => {
                    self.handle_tick()?;
                }
            }
        }
        debug!("countdown engine shutting down");
        Ok(())
    }

    /// Waits for the next armed tick, or forever when no ticker exists.
    async fn next_tick(ticker: &mut Option<Interval>) {
        match ticker {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending().await,
        }
    }

    /// Dispatches a command to the matching operation.
    pub fn apply(&mut self, command: TimerCommand) -> Result<()> {
        match command {
            TimerCommand::SwitchMode(mode) => self.switch_mode(mode),
            TimerCommand::ToggleRun => self.toggle_run(),
            TimerCommand::Reset => self.reset(),
        }
    }

    /// Switches the active mode, stopping and resetting the countdown.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<()> {
        self.disarm_ticker();
        self.state.switch_mode(mode);
        self.publish();

        info!(mode = mode.as_str(), "mode switched");
        self.event_tx
            .send(TimerEvent::ModeChanged { mode })
            .context("failed to send mode changed event")?;
        Ok(())
    }

    /// Starts the countdown if paused, pauses it if running.
    ///
    /// Toggling a completed countdown (zero seconds left) is a no-op; the
    /// user resets or switches modes to go again.
    pub fn toggle_run(&mut self) -> Result<()> {
        if self.state.is_running {
            self.disarm_ticker();
            self.state.is_running = false;
            self.publish();

            self.event_tx
                .send(TimerEvent::Paused {
                    mode: self.state.mode,
                    remaining_seconds: self.state.remaining_seconds,
                })
                .context("failed to send paused event")?;
        } else if self.state.is_completed() {
            debug!("run toggle ignored, countdown already at zero");
        } else {
            self.state.is_running = true;
            self.arm_ticker();
            self.publish();

            self.event_tx
                .send(TimerEvent::Started {
                    mode: self.state.mode,
                    remaining_seconds: self.state.remaining_seconds,
                })
                .context("failed to send started event")?;
        }
        Ok(())
    }

    /// Stops the countdown and restores the current mode's full duration.
    pub fn reset(&mut self) -> Result<()> {
        self.disarm_ticker();
        self.state.reset();
        self.publish();

        self.event_tx
            .send(TimerEvent::Reset {
                mode: self.state.mode,
            })
            .context("failed to send reset event")?;
        Ok(())
    }

    /// Applies one elapsed second.
    ///
    /// On completion the ticker is dropped, the chime is attempted once
    /// (best effort, result discarded), and a single `Completed` event is
    /// emitted.
    pub fn handle_tick(&mut self) -> Result<()> {
        // A tick delivered after a pause or mode switch must not count.
        if !self.state.is_running {
            return Ok(());
        }

        let completed = self.state.tick();
        self.publish();

        if completed {
            self.disarm_ticker();

            if let Err(e) = self.sound.play() {
                debug!("completion chime failed: {e}");
            }

            info!(mode = self.state.mode.as_str(), "countdown completed");
            self.event_tx
                .send(TimerEvent::Completed {
                    mode: self.state.mode,
                })
                .context("failed to send completed event")?;
        }
        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    /// Schedules the ticker, first tick one full period from now.
    fn arm_ticker(&mut self) {
        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(ticker);
    }

    /// Cancels any pending tick.
    fn disarm_ticker(&mut self) {
        self.ticker = None;
    }

    /// Broadcasts the current state snapshot to the UI.
    fn publish(&self) {
        self.state_tx.send_replace(self.state);
    }
}

// ============================================================================
// Tests
// ============================================================================
