//! Sample buffers passed between pipeline stages.

use freqset_spec::IntegerSampleFormat;

use crate::composer::peak;

/// Real-valued samples of one synthesized segment, or of a composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneBuffer {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl ToneBuffer {
    /// Wraps samples generated at `sample_rate`.
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Samples in order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Largest absolute sample value, 0.0 for an empty buffer.
    pub fn peak(&self) -> f64 {
        peak(&self.samples)
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Final fixed-point samples.
///
/// Values are stored widened to `i32` and always lie within the range of
/// `format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i32>,
    format: IntegerSampleFormat,
    sample_rate: u32,
}

impl AudioBuffer {
    pub(crate) fn new(samples: Vec<i32>, format: IntegerSampleFormat, sample_rate: u32) -> Self {
        Self {
            samples,
            format,
            sample_rate,
        }
    }

    /// Samples in order.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Sample width.
    pub fn format(&self) -> IntegerSampleFormat {
        self.format
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_samples(self) -> Vec<i32> {
        self.samples
    }

    /// Little-endian PCM bytes, `format.bytes()` per sample.
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        let width = self.format.bytes();
        let mut pcm = Vec::with_capacity(self.samples.len() * width);
        for &sample in &self.samples {
            // Two's complement keeps the low bytes of the widened value valid.
            pcm.extend_from_slice(&sample.to_le_bytes()[..width]);
        }
        pcm
    }
}
