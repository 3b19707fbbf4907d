//! Frequency limiting by octave folding.
//!
//! A requested fundamental above the waveform's ceiling is halved until it
//! fits, so out-of-range frequencies keep their pitch class instead of being
//! rejected. Sweep endpoints are folded independently and may therefore end
//! up a different number of octaves apart than requested.

use std::fmt;

use freqset_spec::{Segment, WaveformKind};

/// Folds `frequency` down by octaves until it does not exceed
/// `sample_rate * waveform.nyquist_fraction()`.
///
/// Never fails. Values that cannot be folded (non-finite or non-positive
/// frequencies, or a non-positive ceiling) are returned unchanged.
///
/// # Example
/// ```
/// use freqset_backend_audio::limiter::limit;
/// use freqset_spec::WaveformKind;
///
/// assert_eq!(limit(10000.0, WaveformKind::Sine, 48000.0), 1250.0);
/// assert_eq!(limit(10000.0, WaveformKind::Pulse, 48000.0), 10000.0);
/// ```
pub fn limit(frequency: f64, waveform: WaveformKind, sample_rate: f64) -> f64 {
    let max_freq = waveform.max_frequency(sample_rate);
    if !(frequency.is_finite() && frequency > 0.0 && max_freq.is_finite() && max_freq > 0.0) {
        return frequency;
    }

    let mut frequency = frequency;
    while frequency > max_freq {
        frequency /= 2.0;
    }
    frequency
}

/// Outcome of limiting both endpoints of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyCorrection {
    /// Segment as requested.
    pub requested: Segment,
    /// Segment with both endpoints limited.
    pub applied: Segment,
}

impl FrequencyCorrection {
    /// Whether either endpoint was folded.
    pub fn is_adjusted(&self) -> bool {
        self.requested != self.applied
    }
}

impl fmt::Display for FrequencyCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Adjusted frequency from {}-{} Hz to {}-{} Hz due to sample rate limits.",
            self.requested.start_frequency(),
            self.requested.end_frequency(),
            self.applied.start_frequency(),
            self.applied.end_frequency()
        )
    }
}

/// Limits both endpoints of a segment independently.
pub fn limit_segment(
    segment: &Segment,
    waveform: WaveformKind,
    sample_rate: f64,
) -> FrequencyCorrection {
    let start = limit(segment.start_frequency(), waveform, sample_rate);
    let end = limit(segment.end_frequency(), waveform, sample_rate);
    FrequencyCorrection {
        requested: *segment,
        applied: segment.with_frequencies(start, end),
    }
}
