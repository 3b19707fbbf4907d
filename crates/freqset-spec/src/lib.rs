//! FreqSet Spec Library
//!
//! This crate provides the data model shared by every FreqSet crate: frequency
//! segments and their parser, waveform kinds, generation parameters, and the
//! error and warning types used to report problems.
//!
//! # Overview
//!
//! A frequency set is a compact, comma-separated description of tones:
//!
//! - `144` - a fixed 144 Hz tone for the default dwell time
//! - `144=360` - a fixed tone held for 360 seconds
//! - `160-180` - a linear sweep from 160 Hz to 180 Hz
//! - `520-555=60` - a sweep held for 60 seconds
//!
//! # Example
//!
//! ```
//! use freqset_spec::{parse_frequency_set, validate_params, GenerationParams, WaveformKind};
//!
//! let segments = parse_frequency_set("144,160-180,520-555=60", 180.0).unwrap();
//! assert_eq!(segments.len(), 3);
//! assert!(segments[1].is_sweep());
//!
//! let params = GenerationParams::new("144,160-180").waveform("triangle");
//! assert!(validate_params(&params).is_ok());
//! assert_eq!(WaveformKind::Triangle.max_frequency(48000.0), 6000.0);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types
//! - [`params`]: Generation parameters, composition modes and sample formats
//! - [`segment`]: Segment type and frequency-set parser
//! - [`validation`]: Parameter validation
//! - [`waveform`]: Waveform kinds and their frequency ceilings

pub mod error;
pub mod params;
pub mod segment;
pub mod validation;
pub mod waveform;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, GenerationError, ParseError, SpecError, ValidationError,
    ValidationResult, ValidationWarning, WarningCode,
};
pub use params::{
    CompositionMode, GenerationParams, IntegerSampleFormat, DEFAULT_DWELL_SECONDS,
    DEFAULT_FREQUENCIES, DEFAULT_SAMPLE_RATE, DEFAULT_WAVEFORM, STANDARD_SAMPLE_RATES,
};
pub use segment::{parse_frequency_set, Segment};
pub use validation::{unequal_durations_warning, validate_params};
pub use waveform::{UnknownWaveformError, WaveformKind};
