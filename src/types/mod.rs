//! Core data types for the countdown timer.
//!
//! This module defines:
//! - The fixed set of timer modes and their durations
//! - The mutable session state driven by the countdown engine

// ============================================================================
// Mode
// ============================================================================

/// One of the three fixed countdown presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A 25-minute focus session
    #[default]
    Focus,
    /// A 5-minute short break
    ShortBreak,
    /// A 15-minute long break
    LongBreak,
}

impl Mode {
    /// All modes, in the order the mode selector displays them.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Returns the preset duration for this mode, in seconds.
    ///
    /// Every mode has exactly one entry; the values are fixed constants.
    pub fn duration_seconds(self) -> u32 {
        match self {
            Mode::Focus => 25 * 60,
            Mode::ShortBreak => 5 * 60,
            Mode::LongBreak => 15 * 60,
        }
    }

    /// Returns the human-readable label shown in the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Returns the snake_case identifier used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    /// Returns this mode's position in [`Mode::ALL`].
    pub fn index(self) -> usize {
        match self {
            Mode::Focus => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The mutable countdown session state.
///
/// Created once at startup, mutated only by the engine operations
/// (mode switch, run toggle, reset, tick), and rendered by the UI from
/// snapshots. `remaining_seconds` always stays within
/// `0..=mode.duration_seconds()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// The active mode
    pub mode: Mode,
    /// Seconds left in the current countdown
    pub remaining_seconds: u32,
    /// Whether the countdown is currently ticking
    pub is_running: bool,
}

impl TimerState {
    /// Creates the initial state: focus mode, full duration, not running.
    pub fn new() -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: Mode::Focus.duration_seconds(),
            is_running: false,
        }
    }

    /// Switches to `mode`, stopping the countdown and resetting the
    /// remaining time to the new mode's full duration.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.is_running = false;
        self.mode = mode;
        self.remaining_seconds = mode.duration_seconds();
    }

    /// Stops the countdown and restores the current mode's full duration.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.mode.duration_seconds();
    }

    /// Applies one elapsed second.
    ///
    /// Decrements the remaining time by exactly 1 while running, stopping
    /// the countdown when it reaches zero. Returns `true` exactly when this
    /// tick completed the countdown. A tick while not running is a no-op,
    /// so a stale tick after pause or completion never decrements again.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.is_running = false;
            true
        } else {
            false
        }
    }

    /// Returns the elapsed-over-total fraction in `[0, 1]` for the
    /// progress indicator: 0 at full duration, 1 at completion.
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_seconds();
        f64::from(total - self.remaining_seconds) / f64::from(total)
    }

    /// Returns true once the countdown has reached zero.
    pub fn is_completed(&self) -> bool {
        self.remaining_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Mode Tests
    // ------------------------------------------------------------------------

    mod mode_tests {
        use super::*;

        #[test]
        fn test_default_is_focus() {
            assert_eq!(Mode::default(), Mode::Focus);
        }

        #[test]
        fn test_duration_table() {
            assert_eq!(Mode::Focus.duration_seconds(), 1500);
            assert_eq!(Mode::ShortBreak.duration_seconds(), 300);
            assert_eq!(Mode::LongBreak.duration_seconds(), 900);
        }

        #[test]
        fn test_labels() {
            assert_eq!(Mode::Focus.label(), "Focus");
            assert_eq!(Mode::ShortBreak.label(), "Short Break");
            assert_eq!(Mode::LongBreak.label(), "Long Break");
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Mode::Focus.as_str(), "focus");
            assert_eq!(Mode::ShortBreak.as_str(), "short_break");
            assert_eq!(Mode::LongBreak.as_str(), "long_break");
        }

        #[test]
        fn test_index_matches_all_order() {
            for (i, mode) in Mode::ALL.iter().enumerate() {
                assert_eq!(mode.index(), i);
            }
        }

        #[test]
        fn test_all_durations_positive() {
            for mode in Mode::ALL {
                assert!(mode.duration_seconds() > 0);
            }
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let state = TimerState::new();

            assert_eq!(state.mode, Mode::Focus);
            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.is_running);
        }

        #[test]
        fn test_switch_mode_resets_and_stops() {
            let mut state = TimerState::new();
            state.is_running = true;
            state.remaining_seconds = 1000;

            state.switch_mode(Mode::ShortBreak);

            assert_eq!(state.mode, Mode::ShortBreak);
            assert_eq!(state.remaining_seconds, 300);
            assert!(!state.is_running);
        }

        #[test]
        fn test_switch_mode_from_any_prior_state() {
            for mode in Mode::ALL {
                let mut state = TimerState::new();
                state.is_running = true;
                state.remaining_seconds = 7;

                state.switch_mode(mode);

                assert_eq!(state.remaining_seconds, mode.duration_seconds());
                assert!(!state.is_running);
            }
        }

        #[test]
        fn test_switch_to_same_mode_resets() {
            let mut state = TimerState::new();
            state.is_running = true;
            state.remaining_seconds = 42;

            state.switch_mode(Mode::Focus);

            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.is_running);
        }

        #[test]
        fn test_reset() {
            let mut state = TimerState::new();
            state.switch_mode(Mode::LongBreak);
            state.is_running = true;
            state.remaining_seconds = 123;

            state.reset();

            assert_eq!(state.mode, Mode::LongBreak);
            assert_eq!(state.remaining_seconds, 900);
            assert!(!state.is_running);
        }

        #[test]
        fn test_tick_decrements_by_exactly_one() {
            let mut state = TimerState::new();
            state.is_running = true;

            let completed = state.tick();

            assert!(!completed);
            assert_eq!(state.remaining_seconds, 1499);
            assert!(state.is_running);
        }

        #[test]
        fn test_tick_completes_at_zero() {
            let mut state = TimerState::new();
            state.is_running = true;
            state.remaining_seconds = 1;

            let completed = state.tick();

            assert!(completed);
            assert_eq!(state.remaining_seconds, 0);
            assert!(!state.is_running);
        }

        #[test]
        fn test_tick_while_not_running_is_noop() {
            let mut state = TimerState::new();
            state.remaining_seconds = 10;

            let completed = state.tick();

            assert!(!completed);
            assert_eq!(state.remaining_seconds, 10);
        }

        #[test]
        fn test_tick_after_completion_never_fires_again() {
            let mut state = TimerState::new();
            state.is_running = true;
            state.remaining_seconds = 1;

            assert!(state.tick());

            // Further ticks must not report completion or go negative.
            for _ in 0..3 {
                assert!(!state.tick());
                assert_eq!(state.remaining_seconds, 0);
            }
        }

        #[test]
        fn test_progress_zero_after_switch_and_reset() {
            let mut state = TimerState::new();
            state.is_running = true;
            state.remaining_seconds = 700;

            state.switch_mode(Mode::ShortBreak);
            assert_eq!(state.progress(), 0.0);

            state.is_running = true;
            state.tick();
            state.reset();
            assert_eq!(state.progress(), 0.0);
        }

        #[test]
        fn test_progress_one_exactly_at_zero() {
            let mut state = TimerState::new();
            state.remaining_seconds = 0;
            assert_eq!(state.progress(), 1.0);

            state.remaining_seconds = 1;
            assert!(state.progress() < 1.0);
        }

        #[test]
        fn test_progress_after_three_ticks() {
            let mut state = TimerState::new();
            state.is_running = true;
            for _ in 0..3 {
                state.tick();
            }

            // 3 of 1500 seconds elapsed, roughly 0.2%.
            assert!((state.progress() - 0.002).abs() < 1e-9);
        }

        #[test]
        fn test_is_completed() {
            let mut state = TimerState::new();
            assert!(!state.is_completed());

            state.remaining_seconds = 0;
            assert!(state.is_completed());
        }
    }
}
