//! Error types for audio backend.

use freqset_spec::{BackendError, ParseError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
///
/// Every error aborts the whole generation; no partial buffer is returned.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Malformed frequency-set token.
    #[error("invalid frequency set: {0}")]
    Parse(ParseError),

    /// Non-positive duration, or a duration too short for a single sample.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Nothing to compose.
    #[error("frequency set produced no segments")]
    EmptyInput,

    /// Simultaneous composition of buffers with different lengths.
    #[error("buffer {index} has {found} samples, expected {expected}")]
    LengthMismatch {
        /// Index of the offending buffer.
        index: usize,
        /// Length of the first buffer.
        expected: usize,
        /// Length of the offending buffer.
        found: usize,
    },

    /// NaN or infinity reached quantization.
    #[error("non-finite sample {value} at index {index}")]
    NonFiniteSample {
        /// Sample index.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while writing a container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<ParseError> for AudioError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::NonPositiveDwell { dwell, .. } => {
                AudioError::InvalidDuration { duration: dwell }
            }
            other => AudioError::Parse(other),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Parse(_) => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::EmptyInput => "AUDIO_003",
            AudioError::LengthMismatch { .. } => "AUDIO_004",
            AudioError::NonFiniteSample { .. } => "AUDIO_005",
            AudioError::InvalidSampleRate { .. } => "AUDIO_006",
            AudioError::InvalidParameter { .. } => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
