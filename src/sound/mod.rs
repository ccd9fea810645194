//! Completion chime playback.
//!
//! The countdown engine treats sound as an injected capability: "play this
//! cue, ignore failure". This module provides:
//!
//! - A [`SoundPlayer`] trait at that seam
//! - [`RodioSoundPlayer`], the real rodio-backed implementation
//! - [`NullSoundPlayer`], the silent fallback for audio-less environments
//! - [`MockSoundPlayer`], for asserting playback behavior in tests

mod embedded;
mod error;
mod player;

use std::sync::Arc;

use tracing::warn;

pub use embedded::{chime_bytes, CHIME_DATA};
pub use error::SoundError;
pub use player::RodioSoundPlayer;

/// Trait for chime playback implementations.
///
/// Implementations must be non-blocking: `play` returns as soon as playback
/// has been handed off, and the caller is free to discard the result.
pub trait SoundPlayer {
    /// Plays the completion chime.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails. Callers on the countdown path
    /// discard this error; it never affects timer state.
    fn play(&self) -> Result<(), SoundError>;

    /// Returns true if the chime is muted.
    fn is_muted(&self) -> bool;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self)
    }

    fn is_muted(&self) -> bool {
        RodioSoundPlayer::is_muted(self)
    }
}

// ============================================================================
// NullSoundPlayer
// ============================================================================

/// A player that never makes a sound.
///
/// Used when no audio device is available so the rest of the app does not
/// need to care whether audio works.
#[derive(Debug, Default)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        Ok(())
    }

    fn is_muted(&self) -> bool {
        true
    }
}

// ============================================================================
// MockSoundPlayer
// ============================================================================

/// Mock chime player for tests.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_count: std::sync::atomic::AtomicUsize,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `play` calls fail, to exercise the discard path.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Number of times `play` was attempted (including failed attempts).
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        self.play_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("mock failure".to_string()));
        }
        Ok(())
    }

    fn is_muted(&self) -> bool {
        false
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Creates the chime player for the app, never failing.
///
/// If audio initialization fails (no output device), a warning is logged
/// and the silent player is returned instead.
#[must_use]
pub fn create_player(muted: bool) -> Arc<dyn SoundPlayer + Send + Sync> {
    match RodioSoundPlayer::new(muted) {
        Ok(player) => Arc::new(player),
        Err(e) => {
            warn!("audio not available, chime disabled: {e}");
            Arc::new(NullSoundPlayer)
        }
    }
}
