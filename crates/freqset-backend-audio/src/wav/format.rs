//! WAV format parameters.

use freqset_spec::IntegerSampleFormat;

/// Size of the canonical RIFF/WAVE header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// Largest number of mono samples whose PCM payload still fits the 32-bit
/// RIFF size field.
pub fn max_samples(sample_format: IntegerSampleFormat) -> usize {
    (u32::MAX as usize - (WAV_HEADER_LEN - 8)) / sample_format.bytes()
}

/// WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16, 24 or 32).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono format for the given sample width.
    pub fn mono(sample_rate: u32, sample_format: IntegerSampleFormat) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: sample_format.bits(),
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
