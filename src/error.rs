//! Unified error types for beatscan
//!
//! Error strategy: every failure funnels into one enum whose Display string
//! becomes the `{"error": ...}` payload on stdout. Messages stay on a single
//! line so the JSON reads cleanly.

use std::path::PathBuf;
use thiserror::Error;

/// Supported audio formats for helpful error messages
pub const SUPPORTED_FORMATS: &str = "MP3, WAV, FLAC, AIFF";

/// Top-level error type for beatscan operations
#[derive(Debug, Error)]
pub enum BeatscanError {
    #[error("File not found: '{0}'")]
    FileNotFound(PathBuf),

    #[error("Failed to decode audio file '{path}': {reason} (supported formats: {SUPPORTED_FORMATS})")]
    DecodeError { path: PathBuf, reason: String },

    #[error("Analysis failed for '{path}': {reason}")]
    AnalysisError { path: PathBuf, reason: String },

    #[error("Cache error for '{path}': {reason}")]
    CacheError { path: PathBuf, reason: String },
}

/// Result type alias for beatscan operations
pub type Result<T> = std::result::Result<T, BeatscanError>;

impl BeatscanError {
    /// Create a decode error with context about the issue
    pub fn decode_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BeatscanError::DecodeError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an analysis error with context about the issue
    pub fn analysis_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BeatscanError::AnalysisError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a cache error with context about the issue
    pub fn cache_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BeatscanError::CacheError {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
