//! WAV file generation result type.

use super::format::WavFormat;
use super::writer::write_wav_to_vec;
use crate::buffer::AudioBuffer;
use crate::error::AudioResult;

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavResult {
    /// Wraps quantized audio in a mono WAV container.
    pub fn from_audio(audio: &AudioBuffer) -> AudioResult<Self> {
        let pcm = audio.to_pcm_bytes();
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(audio.sample_rate(), audio.format());
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: audio.sample_rate(),
            num_samples: audio.len(),
            bits_per_sample: format.bits_per_sample,
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
