//! Core data types for beatscan
//!
//! These types represent the domain model and flow through the pipeline:
//! decoded audio in, tracked beats through, a rounded estimate out.

use serde::{Deserialize, Serialize};

// =============================================================================
// Analysis results
// =============================================================================

/// Raw output of the beat-tracking step, before output rounding.
///
/// `beats` holds beat instants in seconds, ascending. `bpm` is 0.0 when fewer
/// than two beats were found, since no interval exists to derive a tempo from.
#[derive(Debug, Clone, Default)]
pub struct BeatTrack {
    /// Tempo estimate in beats per minute
    pub bpm: f64,
    /// Beat instants in seconds from the start of the stream
    pub beats: Vec<f64>,
}

impl BeatTrack {
    /// Check if the tracker reported no beats at all
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }
}

/// Final detection result, serialized as `{"bpm": ..., "firstBeatTime": ...}`.
///
/// Constructed through [`BeatEstimate::from_track`], which applies the output
/// rounding (2 decimals for bpm, 4 for the first beat), so un-rounded values
/// never reach the output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatEstimate {
    /// Tempo in beats per minute, rounded to 2 decimal places
    pub bpm: f64,
    /// Seconds offset of the first detected beat, rounded to 4 decimal
    /// places; 0.0 when no beats were detected
    #[serde(rename = "firstBeatTime")]
    pub first_beat_time: f64,
}

impl BeatEstimate {
    /// Round a tracked result into the reportable estimate
    pub fn from_track(track: &BeatTrack) -> Self {
        let first = track.beats.first().copied().unwrap_or(0.0);
        Self {
            bpm: round_to(track.bpm, 2),
            first_beat_time: round_to(first, 4),
        }
    }
}

/// Error payload, serialized as `{"error": "<message>"}`.
///
/// Mutually exclusive with [`BeatEstimate`]: one invocation prints exactly
/// one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable failure message
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Round to a fixed number of decimal places (half away from zero)
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// =============================================================================
// Audio buffer types
// =============================================================================

/// Decoded audio samples ready for analysis
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Mono samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz, as encoded in the source file
    pub sample_rate: u32,
    /// Duration in seconds
    pub duration: f64,
}

impl AudioBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        // Guard against division by zero - use 0 duration for invalid sample rate
        let duration = if sample_rate > 0 {
            samples.len() as f64 / sample_rate as f64
        } else {
            0.0
        };
        Self {
            samples,
            sample_rate,
            duration,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(128.004, 2), 128.0);
        assert_eq!(round_to(117.456, 2), 117.46);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_four_places() {
        assert_eq!(round_to(0.11609977, 4), 0.1161);
        assert_eq!(round_to(1.99999, 4), 2.0);
    }

    #[test]
    fn test_estimate_from_empty_track() {
        let estimate = BeatEstimate::from_track(&BeatTrack::default());
        assert_eq!(estimate.bpm, 0.0);
        assert_eq!(estimate.first_beat_time, 0.0);
    }

    #[test]
    fn test_estimate_rounds_both_fields() {
        let track = BeatTrack {
            bpm: 119.996643,
            beats: vec![0.48297052, 0.98297052, 1.48297052],
        };
        let estimate = BeatEstimate::from_track(&track);
        assert_eq!(estimate.bpm, 120.0);
        assert_eq!(estimate.first_beat_time, 0.483);
    }

    #[test]
    fn test_estimate_serializes_with_camel_case_key() {
        let estimate = BeatEstimate {
            bpm: 128.0,
            first_beat_time: 0.12,
        };
        let json = serde_json::to_value(&estimate).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("bpm"));
        assert!(object.contains_key("firstBeatTime"));
    }

    #[test]
    fn test_error_report_shape() {
        let report = ErrorReport::new("boom");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_audio_buffer_duration() {
        let buffer = AudioBuffer::new(vec![0.0; 44100], 44100);
        assert_eq!(buffer.len(), 44100);
        assert!((buffer.duration - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_audio_buffer_zero_sample_rate() {
        let buffer = AudioBuffer::new(vec![0.0; 100], 0);
        assert_eq!(buffer.duration, 0.0);
    }
}
