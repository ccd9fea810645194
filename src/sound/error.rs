//! Sound system error types.

use thiserror::Error;

/// Errors that can occur while playing the completion chime.
///
/// The countdown engine discards these; they exist so the player itself
/// can degrade gracefully and log what went wrong.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., headless environment).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to decode the embedded chime.
    #[error("failed to decode chime audio: {0}")]
    DecodeError(String),

    /// Failed to create the audio output sink.
    #[error("failed to create audio sink: {0}")]
    StreamError(String),

    /// Generic playback failure.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error means no audio hardware is usable,
    /// in which case the app falls back to a silent player.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }
}
