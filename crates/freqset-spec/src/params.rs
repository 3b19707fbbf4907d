//! Generation parameters consumed by the synthesis backend.
//!
//! [`GenerationParams`] is the plain, front-end agnostic parameter set. It can
//! be built in code or loaded from a JSON document; missing fields take the
//! defaults of the classic frequency-set generator form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpecError;

/// Default frequency set.
pub const DEFAULT_FREQUENCIES: &str = "144,160,1.2,520,10,10000,304";
/// Default waveform identifier.
pub const DEFAULT_WAVEFORM: &str = "pulse";
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
/// Default dwell per segment in seconds.
pub const DEFAULT_DWELL_SECONDS: f64 = 180.0;
/// Sample rates offered by front ends.
pub const STANDARD_SAMPLE_RATES: [u32; 5] = [48_000, 96_000, 192_000, 384_000, 576_000];

/// How per-segment buffers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    /// Segments play one after another, each for its own duration.
    #[default]
    Sequential,
    /// Segments are summed into one buffer of the first segment's duration.
    Simultaneous,
}

impl CompositionMode {
    /// Maps the "merge frequencies" switch onto a mode.
    pub fn from_merge(merge: bool) -> Self {
        if merge {
            CompositionMode::Simultaneous
        } else {
            CompositionMode::Sequential
        }
    }

    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositionMode::Sequential => "sequential",
            CompositionMode::Simultaneous => "simultaneous",
        }
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed integer PCM sample width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerSampleFormat {
    /// 16-bit signed.
    #[default]
    Int16,
    /// 24-bit signed, packed in three bytes.
    Int24,
    /// 32-bit signed.
    Int32,
}

impl IntegerSampleFormat {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            IntegerSampleFormat::Int16 => 16,
            IntegerSampleFormat::Int24 => 24,
            IntegerSampleFormat::Int32 => 32,
        }
    }

    /// Bytes per sample.
    pub fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Largest representable value, `2^(bits-1) - 1`.
    pub fn max_value(&self) -> i32 {
        match self {
            IntegerSampleFormat::Int16 => i16::MAX as i32,
            IntegerSampleFormat::Int24 => (1 << 23) - 1,
            IntegerSampleFormat::Int32 => i32::MAX,
        }
    }

    /// Smallest representable value, `-2^(bits-1)`.
    pub fn min_value(&self) -> i32 {
        match self {
            IntegerSampleFormat::Int16 => i16::MIN as i32,
            IntegerSampleFormat::Int24 => -(1 << 23),
            IntegerSampleFormat::Int32 => i32::MIN,
        }
    }

    /// Factor that maps a full-scale sample of 1.0 onto `max_value`.
    pub fn scale(&self) -> f64 {
        self.max_value() as f64
    }

    /// Looks up a format by bit depth.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            16 => Some(IntegerSampleFormat::Int16),
            24 => Some(IntegerSampleFormat::Int24),
            32 => Some(IntegerSampleFormat::Int32),
            _ => None,
        }
    }
}

impl fmt::Display for IntegerSampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit signed PCM", self.bits())
    }
}

/// Fully resolved input of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    /// Frequency-set string (see [`crate::parse_frequency_set`]).
    pub frequencies: String,
    /// Waveform identifier; unknown names fall back to sine with a warning.
    pub waveform: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Dwell in seconds for tokens without an explicit `=<dwell>`.
    pub default_dwell: f64,
    /// Composition mode.
    pub mode: CompositionMode,
    /// Output sample width.
    pub sample_format: IntegerSampleFormat,
    /// Peak amplitude applied to every shaped sample, in [0, 1].
    pub amplitude: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            frequencies: DEFAULT_FREQUENCIES.to_string(),
            waveform: DEFAULT_WAVEFORM.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            default_dwell: DEFAULT_DWELL_SECONDS,
            mode: CompositionMode::Sequential,
            sample_format: IntegerSampleFormat::Int16,
            amplitude: 1.0,
        }
    }
}

impl GenerationParams {
    /// Creates parameters for a frequency set, keeping every other default.
    pub fn new(frequencies: impl Into<String>) -> Self {
        Self {
            frequencies: frequencies.into(),
            ..Self::default()
        }
    }

    /// Sets the waveform identifier.
    pub fn waveform(mut self, waveform: impl Into<String>) -> Self {
        self.waveform = waveform.into();
        self
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the default dwell in seconds.
    pub fn default_dwell(mut self, seconds: f64) -> Self {
        self.default_dwell = seconds;
        self
    }

    /// Sets the composition mode.
    pub fn mode(mut self, mode: CompositionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output sample format.
    pub fn sample_format(mut self, sample_format: IntegerSampleFormat) -> Self {
        self.sample_format = sample_format;
        self
    }

    /// Sets the amplitude.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes parameters to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for GenerationParams {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
