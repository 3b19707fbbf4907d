//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `generate`, `segments` and `waveforms`. Errors and warnings carry stable
//! codes: `CLI_xxx` for CLI-level failures, and the validation (`E00x`,
//! `W00x`) and backend (`AUDIO_xxx`) codes passed through unchanged.

use anyhow::{Context, Result};
use freqset_backend_audio::{AudioError, SegmentReport};
use freqset_spec::{BackendError, Segment, ValidationError, ValidationWarning};
use serde::Serialize;

use crate::input::InputError;

/// Error codes for CLI operations.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Output format not supported
    pub const UNSUPPORTED_FORMAT: &str = "CLI_004";
    /// Unsupported bit depth
    pub const UNSUPPORTED_BIT_DEPTH: &str = "CLI_005";
    /// Output file could not be written
    pub const OUTPUT_WRITE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E004", "AUDIO_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parameter the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the parameter path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Parameter the warning refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One segment as requested and as synthesized.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentJson {
    /// Position in the frequency set
    pub index: usize,
    /// Segment as parsed
    pub requested: Segment,
    /// Segment after limiting (and the shared duration in simultaneous mode)
    pub applied: Segment,
    /// Samples synthesized for this segment
    pub num_samples: usize,
    /// Whether the limiter folded either endpoint
    pub frequency_adjusted: bool,
    /// Whether the duration was replaced
    pub duration_adjusted: bool,
}

impl From<&SegmentReport> for SegmentJson {
    fn from(report: &SegmentReport) -> Self {
        Self {
            index: report.index,
            requested: report.requested,
            applied: report.applied,
            num_samples: report.num_samples,
            frequency_adjusted: report.frequency_adjusted(),
            duration_adjusted: report.duration_adjusted(),
        }
    }
}

/// Generation result details.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResultJson {
    /// Path of the written WAV file
    pub output_path: String,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Waveform actually used
    pub waveform: String,
    /// Composition mode
    pub mode: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Total number of samples
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Per-segment details
    pub segments: Vec<SegmentJson>,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during generation
    pub errors: Vec<JsonError>,
    /// Warnings from validation/generation
    pub warnings: Vec<JsonWarning>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResultJson>,
    /// BLAKE3 hash of the params file (if one was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(
        result: GenerateResultJson,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            source_hash,
        }
    }

    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            source_hash,
        }
    }
}

/// JSON output for the `segments` command.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentsOutput {
    /// Whether the frequency set was accepted
    pub success: bool,
    /// Errors encountered while planning
    pub errors: Vec<JsonError>,
    /// Warnings from validation/planning
    pub warnings: Vec<JsonWarning>,
    /// Waveform actually used (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waveform: Option<String>,
    /// Total samples the generation would produce (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<usize>,
    /// Per-segment details
    pub segments: Vec<SegmentJson>,
}

/// One waveform kind.
#[derive(Debug, Clone, Serialize)]
pub struct WaveformJson {
    /// Identifier accepted by `--waveform`
    pub name: String,
    /// Ceiling as a fraction of the sample rate
    pub nyquist_fraction: f64,
    /// Ceiling in Hz at the reported sample rate
    pub max_frequency: f64,
    /// Whether samples lie in [0, 1] rather than [-1, 1]
    pub unipolar: bool,
}

/// JSON output for the `waveforms` command.
#[derive(Debug, Clone, Serialize)]
pub struct WaveformsOutput {
    /// Sample rate the ceilings were computed for
    pub sample_rate: u32,
    /// Waveform kinds in menu order
    pub waveforms: Vec<WaveformJson>,
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// Converts a backend error to a JsonError carrying its stable code.
pub fn audio_error_to_json(err: &AudioError) -> JsonError {
    JsonError::new(err.code(), err.to_string())
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
