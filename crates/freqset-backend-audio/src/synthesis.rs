//! Tone synthesis for fixed tones and linear sweeps.
//!
//! A segment is rendered as a linear chirp: the instantaneous frequency moves
//! linearly from the start to the end frequency over the segment's duration,
//! and the phase is its exact integral
//!
//! ```text
//! phase(t) = 2π (f0 t + 0.5 (f1 - f0) t² / duration)
//! ```
//!
//! For a fixed tone (`f0 == f1`) this reduces to `2π f0 t`. The phase is
//! computed per sample from `t` rather than accumulated, so long segments do
//! not drift.

use freqset_spec::{IntegerSampleFormat, Segment, WaveformKind};

use crate::buffer::ToneBuffer;
use crate::error::{AudioError, AudioResult};
use crate::oscillator::{Shape, TWO_PI};
use crate::wav::max_samples;

/// Instantaneous phase of a linear chirp at time `t` seconds.
#[inline]
pub fn chirp_phase(start_frequency: f64, end_frequency: f64, duration: f64, t: f64) -> f64 {
    TWO_PI * (start_frequency * t + 0.5 * (end_frequency - start_frequency) * t * t / duration)
}

/// Synthesizes one segment.
///
/// Produces `floor(duration * sample_rate)` samples of
/// `amplitude * waveform.shape(phase(i / sample_rate))`. The segment's
/// frequencies are used as given; limit them beforehand.
///
/// # Errors
/// * `InvalidSampleRate` if `sample_rate` is not positive and finite
/// * `InvalidDuration` if the segment is too short to hold one sample, or
///   longer than the largest 16-bit WAV payload
/// * `InvalidParameter` if `amplitude` is not finite
pub fn synthesize(
    segment: &Segment,
    sample_rate: f64,
    waveform: WaveformKind,
    amplitude: f64,
) -> AudioResult<ToneBuffer> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if !amplitude.is_finite() {
        return Err(AudioError::invalid_param(
            "amplitude",
            format!("must be finite, got {}", amplitude),
        ));
    }

    let duration = segment.duration();
    let num_samples = segment.num_samples(sample_rate);
    if num_samples == 0 || num_samples > max_samples(IntegerSampleFormat::Int16) {
        return Err(AudioError::InvalidDuration { duration });
    }

    let f0 = segment.start_frequency();
    let f1 = segment.end_frequency();

    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            amplitude * waveform.shape(chirp_phase(f0, f1, duration, t))
        })
        .collect();

    Ok(ToneBuffer::new(samples, sample_rate))
}
