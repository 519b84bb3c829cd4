//! CLI definitions using clap.

use crate::audio::DEFAULT_ALARM_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Pomoglow - a Pomodoro timer with an animated blob background
#[derive(Parser, Debug)]
#[command(name = "pomoglow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the looping alarm sound asset
    #[arg(short, long, default_value = DEFAULT_ALARM_PATH)]
    pub alarm: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alarm_path() {
        let cli = Cli::parse_from(["pomoglow"]);
        assert_eq!(cli.alarm, PathBuf::from(DEFAULT_ALARM_PATH));
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_alarm_override() {
        let cli = Cli::parse_from(["pomoglow", "--alarm", "/tmp/chime.ogg", "--verbose"]);
        assert_eq!(cli.alarm, PathBuf::from("/tmp/chime.ogg"));
        assert!(cli.is_verbose());
    }
}
