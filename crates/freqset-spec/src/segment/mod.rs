//! Frequency-set segments: fixed tones and linear sweeps.
//!
//! A frequency set is a comma-separated list such as
//! `"144,160-180,520-555=60"`. Each non-empty token becomes one [`Segment`].

mod parser;


use serde::Serialize;
use std::fmt;

pub use parser::parse_frequency_set;

/// One requested tone or sweep.
///
/// Both frequencies are positive and finite and the duration is strictly
/// positive. Segments are never mutated; corrections build a new segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    start_frequency: f64,
    end_frequency: f64,
    duration: f64,
}

impl Segment {
    /// Creates a segment, or `None` if a frequency or the duration is not
    /// positive and finite.
    pub fn new(start_frequency: f64, end_frequency: f64, duration: f64) -> Option<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(start_frequency) && positive(end_frequency) && positive(duration) {
            Some(Self {
                start_frequency,
                end_frequency,
                duration,
            })
        } else {
            None
        }
    }

    /// Creates a fixed tone.
    pub fn fixed(frequency: f64, duration: f64) -> Option<Self> {
        Self::new(frequency, frequency, duration)
    }

    /// Frequency at the start of the segment, in Hz.
    pub fn start_frequency(&self) -> f64 {
        self.start_frequency
    }

    /// Frequency at the end of the segment, in Hz.
    pub fn end_frequency(&self) -> f64 {
        self.end_frequency
    }

    /// Dwell time in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Whether start and end frequencies differ.
    pub fn is_sweep(&self) -> bool {
        self.start_frequency != self.end_frequency
    }

    /// Returns a copy with both endpoints replaced.
    ///
    /// Frequencies that are not positive and finite leave the endpoint as is.
    pub fn with_frequencies(&self, start_frequency: f64, end_frequency: f64) -> Self {
        Self::new(start_frequency, end_frequency, self.duration).unwrap_or(*self)
    }

    /// Returns a copy with the duration replaced.
    ///
    /// A duration that is not positive and finite leaves the segment as is.
    pub fn with_duration(&self, duration: f64) -> Self {
        Self::new(self.start_frequency, self.end_frequency, duration).unwrap_or(*self)
    }

    /// Number of whole samples this segment covers at a sample rate.
    pub fn num_samples(&self, sample_rate: f64) -> usize {
        let n = (self.duration * sample_rate).floor();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start: {} Hz, End: {} Hz, Duration: {} sec",
            self.start_frequency, self.end_frequency, self.duration
        )
    }
}
