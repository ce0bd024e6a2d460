//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// beatscan - BPM and first-beat detection for audio files
///
/// Analyzes a single audio file, estimates its tempo and the timestamp of the
/// first beat, and prints the result as JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "beatscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Audio file to analyze
    #[arg(value_name = "AUDIO_FILE")]
    pub file: PathBuf,

    /// Directory for cached results (caching is off without this)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Re-analyze even when a cached result exists
    #[arg(long, default_value = "false")]
    pub force: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only on the log stream)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_file() {
        let cli = Cli::try_parse_from(["beatscan", "track.mp3"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("track.mp3"));
        assert!(cli.cache_dir.is_none());
        assert!(!cli.force);
    }

    #[test]
    fn test_requires_audio_file() {
        assert!(Cli::try_parse_from(["beatscan"]).is_err());
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["beatscan", "a.wav", "b.wav"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["beatscan", "--tempo", "a.wav"]).is_err());
    }

    #[test]
    fn test_cache_flags() {
        let cli =
            Cli::try_parse_from(["beatscan", "--cache-dir", "/tmp/bpm", "--force", "a.wav"])
                .unwrap();
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/bpm")));
        assert!(cli.force);
    }

    #[test]
    fn test_log_level_mapping() {
        let base = Cli::try_parse_from(["beatscan", "a.wav"]).unwrap();
        assert_eq!(base.log_level(), tracing::Level::WARN);

        let verbose = Cli::try_parse_from(["beatscan", "-vv", "a.wav"]).unwrap();
        assert_eq!(verbose.log_level(), tracing::Level::DEBUG);

        let quiet = Cli::try_parse_from(["beatscan", "-q", "-v", "a.wav"]).unwrap();
        assert_eq!(quiet.log_level(), tracing::Level::ERROR);
    }
}
