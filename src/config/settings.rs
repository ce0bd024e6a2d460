//! Runtime configuration settings

use std::path::PathBuf;

/// Runtime settings for the detection pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Audio file to analyze
    pub file: PathBuf,
    /// Directory for cached results; None disables caching
    pub cache_dir: Option<PathBuf>,
    /// Re-analyze even when a cached result exists
    pub force: bool,
}

impl Settings {
    /// Create settings for a single file with caching disabled
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            cache_dir: None,
            force: false,
        }
    }

    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        Self {
            file: cli.file.clone(),
            cache_dir: cli.cache_dir.clone(),
            force: cli.force,
        }
    }
}
