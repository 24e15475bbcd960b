//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{pace, session};
use crate::pattern::DEFAULT_PATTERN;

/// Guided breathing exercises in your terminal.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Breathing pattern to start with (see --list-patterns).
    #[arg(short = 'P', long, env = "BREATHTUI_PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Breath pace in breaths per minute, for patterns that follow the pace.
    #[arg(short, long, env = "BREATHTUI_PACE", default_value_t = pace::DEFAULT)]
    pub pace: f64,

    /// Session length in minutes.
    #[arg(short, long, env = "BREATHTUI_DURATION", default_value_t = session::DEFAULT)]
    pub duration: f64,

    /// Begin a session as soon as the UI opens.
    #[arg(long)]
    pub start: bool,

    /// Print the built-in breathing patterns and exit.
    #[arg(long)]
    pub list_patterns: bool,

    /// Write logs to this file. Filter with RUST_LOG.
    #[arg(long, env = "BREATHTUI_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["breathtui"]).unwrap();
        assert_eq!(cli.pattern, DEFAULT_PATTERN);
        assert_eq!(cli.pace, pace::DEFAULT);
        assert_eq!(cli.duration, session::DEFAULT);
        assert!(!cli.start);
        assert!(!cli.list_patterns);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "breathtui",
            "-P",
            "Calm (1:2)",
            "-p",
            "6.5",
            "-d",
            "10",
            "--start",
        ])
        .unwrap();
        assert_eq!(cli.pattern, "Calm (1:2)");
        assert_eq!(cli.pace, 6.5);
        assert_eq!(cli.duration, 10.0);
        assert!(cli.start);
    }

    #[test]
    fn test_rejects_non_numeric_pace() {
        assert!(Cli::try_parse_from(["breathtui", "--pace", "fast"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
