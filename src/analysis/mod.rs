//! Audio analysis modules
//!
//! This module provides traits for analysis backends and concrete implementations.
//! The trait abstraction allows swapping backends without changing pipeline code.

pub mod envelope;
pub mod traits;

pub use traits::BeatTracker;

// Real implementation using beat-detector
pub use envelope::EnvelopeBeatTracker;
