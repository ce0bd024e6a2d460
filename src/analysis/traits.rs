//! Analysis trait abstractions
//!
//! These traits define the interface for swappable analysis backends.
//! Current implementation uses the beat-detector library for beat tracking.

use crate::error::Result;
use crate::types::{AudioBuffer, BeatTrack};

/// Beat tracking backend
pub trait BeatTracker: Send + Sync {
    /// Track beats in the audio and derive a tempo estimate
    fn track(&self, buffer: &AudioBuffer) -> Result<BeatTrack>;

    /// Get the name of this tracker (for logging)
    fn name(&self) -> &'static str;
}
