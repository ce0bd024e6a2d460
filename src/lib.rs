//! beatscan - Audio BPM & First-Beat Detection
//!
//! A command-line utility that analyzes a single audio file, estimates its
//! tempo and the timestamp of the first beat, and prints the result as JSON.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `audio`: Audio decoding using symphonia
//! - `analysis`: Beat tracking (with swappable backends)
//! - `cache`: Optional on-disk result cache
//! - `pipeline`: Detection orchestration
//!
//! # Example
//!
//! ```no_run
//! use beatscan::{config::Settings, pipeline};
//!
//! let settings = Settings::new("track.mp3".into());
//! let estimate = pipeline::run(&settings).expect("Detection failed");
//! println!("{} BPM", estimate.bpm);
//! ```

pub mod analysis;
pub mod audio;
pub mod cache;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export key types at crate root
pub use error::{BeatscanError, Result};
pub use types::{AudioBuffer, BeatEstimate, BeatTrack, ErrorReport};
