//! Pipeline orchestration
//!
//! Coordinates cache lookup, decoding, beat tracking, and result rounding
//! for a single file.

use crate::analysis::{BeatTracker, EnvelopeBeatTracker};
use crate::audio;
use crate::cache;
use crate::config::Settings;
use crate::error::{BeatscanError, Result};
use crate::types::BeatEstimate;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Run the full detection pipeline for the configured file
pub fn run(settings: &Settings) -> Result<BeatEstimate> {
    let pipeline_start = Instant::now();

    if !settings.file.exists() {
        return Err(BeatscanError::FileNotFound(settings.file.clone()));
    }

    // Cache lookup before any decoding
    if let Some(cache_dir) = &settings.cache_dir {
        if settings.force {
            debug!("Force mode enabled, ignoring any cached result");
        } else if let Some(estimate) = cache::read(cache_dir, &settings.file) {
            info!("Using cached result for {}", settings.file.display());
            return Ok(estimate);
        }
    }

    let tracker = EnvelopeBeatTracker::new();
    let estimate = detect(&settings.file, &tracker)?;

    if let Some(cache_dir) = &settings.cache_dir {
        cache::write(cache_dir, &settings.file, &estimate)?;
    }

    info!(
        "Detection completed in {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    Ok(estimate)
}

/// Detect tempo and first beat for a single file with the given tracker
pub fn detect(path: &Path, tracker: &dyn BeatTracker) -> Result<BeatEstimate> {
    debug!("Analyzing: {}", path.display());

    let buffer = audio::decode(path)?;

    if buffer.is_empty() {
        return Err(BeatscanError::analysis_error(
            path,
            "Audio stream contains no samples",
        ));
    }

    let track = tracker.track(&buffer).map_err(|e| {
        // Add file context to analysis errors
        match e {
            BeatscanError::AnalysisError { reason, .. } => BeatscanError::AnalysisError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        }
    })?;

    if track.is_empty() {
        debug!("No beats detected in {}", path.display());
    }

    let estimate = BeatEstimate::from_track(&track);

    debug!(
        "Analyzed {}: BPM={:.2}, first beat at {:.4}s",
        path.file_name().unwrap_or_default().to_string_lossy(),
        estimate.bpm,
        estimate.first_beat_time
    );

    Ok(estimate)
}
