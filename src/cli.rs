//! Command line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// A terminal Pomodoro countdown timer.
///
/// Three presets (25m focus, 5m short break, 15m long break), start/pause,
/// reset, and a completion chime. Durations are fixed by design.
#[derive(Parser, Debug)]
#[command(name = "pomotui", version, about)]
pub struct Cli {
    /// Disable the completion chime
    #[arg(long)]
    pub muted: bool,

    /// Append logs to this file (a full-screen TUI cannot log to stdout);
    /// filtered by RUST_LOG, defaulting to info
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["pomotui"]);
        assert!(!cli.muted);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_muted() {
        let cli = Cli::parse_from(["pomotui", "--muted"]);
        assert!(cli.muted);
    }

    #[test]
    fn test_parse_log_file() {
        let cli = Cli::parse_from(["pomotui", "--log-file", "/tmp/pomotui.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/pomotui.log")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["pomotui", "--work-minutes", "30"]);
        assert!(result.is_err());
    }
}
