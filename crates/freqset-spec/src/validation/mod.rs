//! Parameter validation.
//!
//! Validation collects every problem it can find instead of stopping at the
//! first one, so front ends can report them together before running a
//! potentially long generation.


use crate::error::{
    ErrorCode, ParseError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::params::{CompositionMode, GenerationParams};
use crate::segment::{parse_frequency_set, Segment};
use crate::waveform::WaveformKind;

/// Validates generation parameters.
///
/// # Example
/// ```
/// use freqset_spec::{validate_params, GenerationParams};
///
/// let result = validate_params(&GenerationParams::new("144,160-180=30"));
/// assert!(result.is_ok());
///
/// let result = validate_params(&GenerationParams::new("144,abc"));
/// assert!(!result.is_ok());
/// ```
pub fn validate_params(params: &GenerationParams) -> ValidationResult {
    let mut result = ValidationResult::success();

    if params.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample rate must be a positive number of Hz",
            "sample_rate",
        ));
    }

    if !is_positive_finite(params.default_dwell) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDwell,
            format!(
                "default dwell must be a positive number of seconds, got {}",
                params.default_dwell
            ),
            "default_dwell",
        ));
    }

    if !(params.amplitude.is_finite() && (0.0..=1.0).contains(&params.amplitude)) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!("amplitude must be within [0, 1], got {}", params.amplitude),
            "amplitude",
        ));
    }

    if let (_, Some(warning)) = WaveformKind::resolve(&params.waveform) {
        result.add_warning(warning);
    }

    // A bad default dwell is already reported above.
    let dwell = if is_positive_finite(params.default_dwell) {
        params.default_dwell
    } else {
        1.0
    };

    match parse_frequency_set(&params.frequencies, dwell) {
        Ok(segments) if segments.is_empty() => {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyFrequencySet,
                "frequency set does not contain any frequencies",
                "frequencies",
            ));
        }
        Ok(segments) => {
            if params.mode == CompositionMode::Simultaneous {
                if let Some(warning) = unequal_durations_warning(&segments) {
                    result.add_warning(warning);
                }
            }
        }
        Err(err) => {
            result.add_error(parse_error_to_validation(&err));
        }
    }

    result
}

/// Builds the W002 warning when simultaneous segments disagree on duration.
///
/// Only the first segment's duration is used in simultaneous mode; the
/// warning lists every duration that will be ignored.
pub fn unequal_durations_warning(segments: &[Segment]) -> Option<ValidationWarning> {
    let first = segments.first()?.duration();
    let ignored: Vec<String> = segments
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, s)| s.duration() != first)
        .map(|(i, s)| format!("#{} ({} sec)", i, s.duration()))
        .collect();

    if ignored.is_empty() {
        return None;
    }

    Some(ValidationWarning::with_path(
        WarningCode::UnequalDurationsIgnored,
        format!(
            "simultaneous mode uses the first segment's duration ({} sec); ignoring durations of segment(s) {}",
            first,
            ignored.join(", ")
        ),
        "frequencies",
    ))
}

fn parse_error_to_validation(err: &ParseError) -> ValidationError {
    ValidationError::with_path(
        ErrorCode::InvalidFrequencySet,
        err.to_string(),
        format!("frequencies[{}]", err.index()),
    )
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
