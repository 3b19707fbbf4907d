//! Error types for frequency-set parsing, parameter validation and reporting.

use thiserror::Error;

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Sample rate is zero
    InvalidSampleRate,
    /// E002: Default dwell is not a positive, finite number of seconds
    InvalidDwell,
    /// E003: Amplitude outside [0, 1] or not finite
    InvalidAmplitude,
    /// E004: Frequency set could not be parsed
    InvalidFrequencySet,
    /// E005: Frequency set contains no tokens
    EmptyFrequencySet,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "E001",
            ErrorCode::InvalidDwell => "E002",
            ErrorCode::InvalidAmplitude => "E003",
            ErrorCode::InvalidFrequencySet => "E004",
            ErrorCode::EmptyFrequencySet => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes shared by validation and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Unknown waveform identifier, sine is used instead
    UnknownWaveform,
    /// W002: Simultaneous mode ignores every duration but the first
    UnequalDurationsIgnored,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnknownWaveform => "W001",
            WarningCode::UnequalDurationsIgnored => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the offending parameter (e.g., "sample_rate").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error pointing at a parameter.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A non-fatal warning with code and message.
///
/// Produced both by parameter validation and by the generation pipeline when
/// it degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Name of the parameter the warning refers to.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new warning pointing at a parameter.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Errors produced while parsing a frequency-set string.
///
/// Every variant carries the 0-based index of the offending token (counting
/// only non-empty tokens) and the trimmed token text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A numeric field could not be parsed.
    #[error("token {index} ('{token}'): '{value}' is not a number")]
    InvalidNumber {
        /// Token index.
        index: usize,
        /// Token text.
        token: String,
        /// The field that failed to parse.
        value: String,
    },

    /// A delimiter appeared more than once.
    #[error("token {index} ('{token}'): more than one '{delimiter}'")]
    RepeatedDelimiter {
        /// Token index.
        index: usize,
        /// Token text.
        token: String,
        /// The repeated delimiter.
        delimiter: char,
    },

    /// A leading '-' that would read as a negative frequency.
    #[error("token {index} ('{token}'): negative frequencies are not supported")]
    NegativeFrequency {
        /// Token index.
        index: usize,
        /// Token text.
        token: String,
    },

    /// A frequency that is zero, negative or not finite.
    #[error("token {index} ('{token}'): frequency must be positive and finite, got {frequency}")]
    InvalidFrequency {
        /// Token index.
        index: usize,
        /// Token text.
        token: String,
        /// The rejected frequency.
        frequency: f64,
    },

    /// A dwell time that is zero, negative or not finite.
    #[error("token {index} ('{token}'): dwell must be positive and finite, got {dwell}")]
    NonPositiveDwell {
        /// Token index.
        index: usize,
        /// Token text.
        token: String,
        /// The rejected dwell in seconds.
        dwell: f64,
    },
}

impl ParseError {
    /// Index of the token the error refers to.
    pub fn index(&self) -> usize {
        match self {
            ParseError::InvalidNumber { index, .. }
            | ParseError::RepeatedDelimiter { index, .. }
            | ParseError::NegativeFrequency { index, .. }
            | ParseError::InvalidFrequency { index, .. }
            | ParseError::NonPositiveDwell { index, .. } => *index,
        }
    }
}

/// Top-level error type for parameter handling.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of parameter validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code and category so front ends can
/// report failures uniformly without depending on the backend's error enum.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g., "AUDIO_001").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// A type-erased backend error with its code, message and category.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "AUDIO_001").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category (e.g., "audio").
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a `GenerationError` with explicit values.
    pub fn new(code: &'static str, message: impl Into<String>, category: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            source: None,
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
