//! On-disk result cache
//!
//! Each analyzed file gets one JSON entry in the cache directory, keyed by
//! its file name. Entries hold exactly the serialized [`BeatEstimate`], so a
//! cache hit can be printed as-is. Unreadable or corrupt entries are treated
//! as misses and the file is re-analyzed.

use crate::error::{BeatscanError, Result};
use crate::types::BeatEstimate;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the cache entry for an audio file, keyed by file name.
///
/// Returns None for paths without a final component (e.g. `..`), which
/// cannot be cached.
pub fn entry_path(cache_dir: &Path, audio_path: &Path) -> Option<PathBuf> {
    let file_name = audio_path.file_name()?;
    let mut entry_name = file_name.to_os_string();
    entry_name.push(".json");
    Some(cache_dir.join(entry_name))
}

/// Read a cached estimate for an audio file
///
/// Returns None if the entry is missing, unreadable, or fails to parse; the
/// caller re-analyzes in all three cases.
pub fn read(cache_dir: &Path, audio_path: &Path) -> Option<BeatEstimate> {
    let entry = entry_path(cache_dir, audio_path)?;

    if !entry.exists() {
        debug!("No cache entry at {}", entry.display());
        return None;
    }

    let file = match File::open(&entry) {
        Ok(f) => f,
        Err(e) => {
            debug!("Could not open cache entry {}: {}", entry.display(), e);
            return None;
        }
    };

    let reader = BufReader::new(file);
    match serde_json::from_reader::<_, BeatEstimate>(reader) {
        Ok(estimate) => {
            debug!("Cache hit at {}", entry.display());
            Some(estimate)
        }
        Err(e) => {
            debug!("Could not parse cache entry {}: {}", entry.display(), e);
            None
        }
    }
}

/// Write an estimate to the cache
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents a reader ever seeing a half-written entry.
pub fn write(cache_dir: &Path, audio_path: &Path, estimate: &BeatEstimate) -> Result<()> {
    let entry = entry_path(cache_dir, audio_path).ok_or_else(|| {
        BeatscanError::cache_error(audio_path, "Path has no file name to key the cache entry by")
    })?;

    std::fs::create_dir_all(cache_dir).map_err(|e| {
        BeatscanError::cache_error(cache_dir, format!("Failed to create cache directory: {}", e))
    })?;

    // Write to temp file in same directory (ensures same filesystem for atomic rename)
    let temp_path = entry.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        BeatscanError::cache_error(&entry, format!("Failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, estimate).map_err(|e| {
        // Clean up temp file on error
        let _ = std::fs::remove_file(&temp_path);
        BeatscanError::cache_error(&entry, e.to_string())
    })?;

    // Flush buffered bytes before the rename; a flush failure must not
    // install a truncated entry
    writer.flush().map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        BeatscanError::cache_error(&entry, format!("Failed to flush cache entry: {}", e))
    })?;
    drop(writer);

    // Atomic rename: either succeeds completely or fails without modifying target
    std::fs::rename(&temp_path, &entry).map_err(|e| {
        // Clean up temp file on error
        let _ = std::fs::remove_file(&temp_path);
        BeatscanError::cache_error(&entry, format!("Failed to finalize file: {}", e))
    })?;

    debug!("Cached result to {}", entry.display());

    Ok(())
}
