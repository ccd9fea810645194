//! Embedded notification chime.
//!
//! The single fixed sound cue is compiled into the binary so playback never
//! depends on files being present at runtime.

/// The chime played when a countdown completes.
///
/// A short two-tone WAV (16-bit mono PCM), small enough to embed.
pub const CHIME_DATA: &[u8] = include_bytes!("../../assets/notify.wav");

/// Returns the embedded chime bytes.
pub fn chime_bytes() -> &'static [u8] {
    CHIME_DATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_is_valid_wav() {
        let data = chime_bytes();
        assert!(!data.is_empty());
        // RIFF/WAVE header
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WAVE");
    }

    #[test]
    fn test_chime_is_reasonably_small() {
        // The cue is a fire-and-forget blip, not an asset library.
        assert!(chime_bytes().len() < 64 * 1024);
    }
}
