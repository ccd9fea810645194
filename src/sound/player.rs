//! Chime player implementation using rodio.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::embedded::chime_bytes;
use super::error::SoundError;

/// Plays the embedded completion chime through rodio.
///
/// Playback is non-blocking; the sink is detached so the chime keeps
/// playing while the countdown engine moves on.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether the chime is muted.
    muted: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new chime player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// exists (common in containers); callers should fall back to a silent
    /// player in that case.
    pub fn new(muted: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            muted: AtomicBool::new(muted),
        })
    }

    /// Plays the completion chime, returning immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded audio cannot be decoded or the
    /// output sink cannot be created.
    pub fn play(&self) -> Result<(), SoundError> {
        if self.muted.load(Ordering::Relaxed) {
            debug!("chime muted, skipping playback");
            return Ok(());
        }

        let cursor = Cursor::new(chime_bytes());
        let decoder =
            Decoder::new(cursor).map_err(|e| SoundError::DecodeError(e.to_string()))?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        sink.append(decoder);
        sink.detach();

        debug!("chime playback started (detached)");
        Ok(())
    }

    /// Returns true if the chime is currently muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }
}

// SAFETY: `OutputStream` holds a `cpal::Stream`, which is `!Send + !Sync`
// because some platform audio handles must be dropped on the thread that
// created them. The app runs on a current-thread tokio runtime, so the
// player is created, used, and dropped on a single thread; the stream
// itself is never accessed after construction.
unsafe impl Send for RodioSoundPlayer {}
unsafe impl Sync for RodioSoundPlayer {}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("muted", &self.muted.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
