//! Waveform kinds and their harmonic-content limits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationWarning, WarningCode};

/// Waveform family used to shape every segment of a frequency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveformKind {
    /// Pure sine.
    Sine,
    /// Rectangular wave with a 25% duty cycle.
    Lilly,
    /// Rectangular wave with a 50% duty cycle.
    Square,
    /// Rectangular wave with a 5% duty cycle, offset into [0, 1].
    #[default]
    Pulse,
    /// Rising ramp.
    Sawtooth,
    /// Falling ramp.
    ReverseSawtooth,
    /// Symmetric triangle.
    Triangle,
}

impl WaveformKind {
    /// All waveform kinds, in menu order.
    pub const ALL: [WaveformKind; 7] = [
        WaveformKind::Pulse,
        WaveformKind::Lilly,
        WaveformKind::Square,
        WaveformKind::Sawtooth,
        WaveformKind::ReverseSawtooth,
        WaveformKind::Triangle,
        WaveformKind::Sine,
    ];

    /// Returns the identifier used in frequency-set parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Lilly => "lilly",
            WaveformKind::Square => "square",
            WaveformKind::Pulse => "pulse",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::ReverseSawtooth => "reverse_sawtooth",
            WaveformKind::Triangle => "triangle",
        }
    }

    /// Fraction of the sample rate above which a fundamental is folded down.
    ///
    /// Shapes with strong upper harmonics get a lower ceiling than the pure
    /// sine would need, except for `square` which is allowed up to Nyquist.
    pub fn nyquist_fraction(&self) -> f64 {
        match self {
            WaveformKind::Sine | WaveformKind::Lilly => 1.0 / 20.0,
            WaveformKind::Triangle => 1.0 / 8.0,
            WaveformKind::Pulse | WaveformKind::Sawtooth | WaveformKind::ReverseSawtooth => {
                1.0 / 4.0
            }
            WaveformKind::Square => 1.0 / 2.0,
        }
    }

    /// Highest fundamental allowed at the given sample rate.
    pub fn max_frequency(&self, sample_rate: f64) -> f64 {
        sample_rate * self.nyquist_fraction()
    }

    /// Whether every shaped sample is non-negative.
    pub fn is_unipolar(&self) -> bool {
        matches!(self, WaveformKind::Pulse)
    }

    /// Resolves a waveform identifier, falling back to sine.
    ///
    /// Unknown identifiers never fail: they produce `Sine` and a W001 warning.
    pub fn resolve(name: &str) -> (WaveformKind, Option<ValidationWarning>) {
        match name.parse() {
            Ok(kind) => (kind, None),
            Err(err) => (
                WaveformKind::Sine,
                Some(ValidationWarning::with_path(
                    WarningCode::UnknownWaveform,
                    format!("{}; falling back to sine", err),
                    "waveform",
                )),
            ),
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict `FromStr` implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown waveform type: {0}")]
pub struct UnknownWaveformError(pub String);

impl FromStr for WaveformKind {
    type Err = UnknownWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        WaveformKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownWaveformError(s.to_string()))
    }
}
