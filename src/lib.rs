//! pomotui - a terminal Pomodoro countdown timer
//!
//! This library provides:
//! - The countdown engine (three fixed presets, start/pause/reset, one tick
//!   per second, completion chime)
//! - Terminal UI rendering with a mode selector and progress bar
//! - Sound playback for the completion chime
//! - CLI definition and application wiring

pub mod app;
pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use cli::Cli;
pub use engine::{CountdownEngine, EngineHandle, TimerCommand, TimerEvent};
pub use sound::{create_player, MockSoundPlayer, NullSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};
pub use types::{Mode, TimerState};
