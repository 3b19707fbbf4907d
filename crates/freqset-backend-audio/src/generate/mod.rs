//! Main entry point for audio generation.
//!
//! This module takes a [`GenerationParams`] and renders it deterministically:
//! parse the frequency set, limit every segment, synthesize, compose and
//! quantize.

#[cfg(test)]
mod tests;

use freqset_spec::{
    parse_frequency_set, unequal_durations_warning, CompositionMode, GenerationParams, Segment,
    ValidationWarning, WaveformKind,
};

use crate::buffer::AudioBuffer;
use crate::composer::Composer;
use crate::error::{AudioError, AudioResult};
use crate::limiter::limit_segment;
use crate::quantize::quantize;
use crate::synthesis::synthesize;
use crate::wav::{max_samples, WavResult};

/// Non-fatal condition reported alongside generated audio.
pub type GenerationWarning = ValidationWarning;

/// What happened to one parsed segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentReport {
    /// Position in the frequency set.
    pub index: usize,
    /// Segment as parsed.
    pub requested: Segment,
    /// Segment actually synthesized, after frequency limiting and, in
    /// simultaneous mode, the shared duration.
    pub applied: Segment,
    /// Number of samples synthesized for this segment.
    pub num_samples: usize,
}

impl SegmentReport {
    /// Whether the limiter folded either endpoint.
    pub fn frequency_adjusted(&self) -> bool {
        self.requested.start_frequency() != self.applied.start_frequency()
            || self.requested.end_frequency() != self.applied.end_frequency()
    }

    /// Whether the synthesized duration differs from the parsed one.
    pub fn duration_adjusted(&self) -> bool {
        self.requested.duration() != self.applied.duration()
    }
}

/// Result of audio generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Quantized samples.
    pub audio: AudioBuffer,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Waveform actually used.
    pub waveform: WaveformKind,
    /// How segments were combined.
    pub mode: CompositionMode,
    /// One report per parsed segment, in order.
    pub segments: Vec<SegmentReport>,
    /// Warnings collected during generation.
    pub warnings: Vec<GenerationWarning>,
}

impl GenerateResult {
    /// Duration of the rendered audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.audio.duration_seconds()
    }

    /// Number of rendered samples.
    pub fn num_samples(&self) -> usize {
        self.audio.len()
    }
}

/// Segments of one run, resolved but not yet synthesized.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Waveform actually used.
    pub waveform: WaveformKind,
    /// How segments are combined.
    pub mode: CompositionMode,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// One report per parsed segment, in order.
    pub segments: Vec<SegmentReport>,
    /// Warnings collected while planning.
    pub warnings: Vec<GenerationWarning>,
}

impl GenerationPlan {
    /// Number of samples the composed output will hold.
    pub fn num_samples(&self) -> usize {
        match self.mode {
            CompositionMode::Sequential => self
                .segments
                .iter()
                .fold(0_usize, |total, r| total.saturating_add(r.num_samples)),
            CompositionMode::Simultaneous => {
                self.segments.first().map(|r| r.num_samples).unwrap_or(0)
            }
        }
    }
}

/// Resolves parameters into the segments that will be synthesized.
///
/// Validates the scalar parameters, resolves the waveform, parses and limits
/// every segment and applies the shared duration of simultaneous mode. Each
/// parsed segment and each correction is logged at info level, fallbacks at
/// warn level.
///
/// # Errors
/// * `InvalidSampleRate` for a zero sample rate
/// * `InvalidDuration` for an invalid default dwell, a non-positive dwell in
///   the frequency set, a segment shorter than one sample, or output too long
///   for a WAV container in the requested sample format
/// * `InvalidParameter` for an amplitude outside [0, 1]
/// * `Parse` for a malformed frequency set
/// * `EmptyInput` if the frequency set holds no segments
pub fn plan(params: &GenerationParams) -> AudioResult<GenerationPlan> {
    if params.sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: 0.0 });
    }
    if !params.default_dwell.is_finite() || params.default_dwell <= 0.0 {
        return Err(AudioError::InvalidDuration {
            duration: params.default_dwell,
        });
    }
    if !params.amplitude.is_finite() || !(0.0..=1.0).contains(&params.amplitude) {
        return Err(AudioError::invalid_param(
            "amplitude",
            format!("must be between 0 and 1, got {}", params.amplitude),
        ));
    }

    let sample_rate = params.sample_rate as f64;
    let mut warnings = Vec::new();

    let (waveform, fallback) = WaveformKind::resolve(&params.waveform);
    if let Some(warning) = fallback {
        log::warn!("{}", warning);
        warnings.push(warning);
    }

    let segments = parse_frequency_set(&params.frequencies, params.default_dwell)?;
    let first = segments.first().ok_or(AudioError::EmptyInput)?;

    let shared_duration = match params.mode {
        CompositionMode::Sequential => None,
        CompositionMode::Simultaneous => {
            if let Some(warning) = unequal_durations_warning(&segments) {
                log::warn!("{}", warning);
                warnings.push(warning);
            }
            Some(first.duration())
        }
    };

    let limit = max_samples(params.sample_format);
    let mut total_samples = 0_usize;
    let mut reports = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        log::info!("{}", segment);

        let correction = limit_segment(segment, waveform, sample_rate);
        if correction.is_adjusted() {
            log::info!("{}", correction);
        }

        let applied = match shared_duration {
            Some(duration) => correction.applied.with_duration(duration),
            None => correction.applied,
        };

        let num_samples = applied.num_samples(sample_rate);
        if num_samples == 0 || num_samples > limit {
            return Err(AudioError::InvalidDuration {
                duration: applied.duration(),
            });
        }

        if params.mode == CompositionMode::Sequential {
            total_samples = total_samples
                .checked_add(num_samples)
                .filter(|&total| total <= limit)
                .ok_or_else(|| AudioError::InvalidDuration {
                    duration: segments.iter().map(|s| s.duration()).sum(),
                })?;
        }

        reports.push(SegmentReport {
            index,
            requested: *segment,
            applied,
            num_samples,
        });
    }

    Ok(GenerationPlan {
        waveform,
        mode: params.mode,
        sample_rate: params.sample_rate,
        segments: reports,
        warnings,
    })
}

/// Generates audio from parameters.
///
/// Fails for the same reasons as [`plan`]. Segments are synthesized one at a
/// time and folded into the composer immediately.
pub fn generate(params: &GenerationParams) -> AudioResult<GenerateResult> {
    let GenerationPlan {
        waveform,
        mode,
        sample_rate,
        segments,
        warnings,
    } = plan(params)?;

    let mut composer = Composer::new(mode);
    for report in &segments {
        let tone = synthesize(
            &report.applied,
            sample_rate as f64,
            waveform,
            params.amplitude,
        )?;
        composer.push(tone)?;
    }

    let composed = composer.finish()?;
    let audio = quantize(&composed, params.sample_format)?;

    Ok(GenerateResult {
        audio,
        sample_rate,
        waveform,
        mode,
        segments,
        warnings,
    })
}

/// Generates audio and wraps it in a WAV container.
pub fn generate_wav(params: &GenerationParams) -> AudioResult<(GenerateResult, WavResult)> {
    let result = generate(params)?;
    let wav = WavResult::from_audio(&result.audio)?;
    Ok((result, wav))
}
