//! Core WAV writing functions.

use std::io::{self, Write};

use super::format::{WavFormat, WAV_HEADER_LEN};
use crate::error::{AudioError, AudioResult};

/// Builds the canonical header for a payload of `data_size` bytes.
///
/// Returns `None` if the file would exceed the 4 GiB RIFF limit.
pub fn wav_header(format: &WavFormat, data_size: usize) -> Option<[u8; WAV_HEADER_LEN]> {
    let data_size = u32::try_from(data_size).ok()?;
    // Total file size minus 8 bytes for the RIFF header
    let file_size = data_size.checked_add(36)?;

    let mut header = [0u8; WAV_HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    Some(header)
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM samples
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let header = wav_header(format, pcm_data.len()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM payload exceeds the 4 GiB WAV limit",
        )
    })?;
    writer.write_all(&header)?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Errors
/// * `InvalidParameter` if the payload does not fit in a WAV file
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let header = wav_header(format, pcm_data.len()).ok_or_else(|| {
        AudioError::invalid_param(
            "duration",
            format!(
                "{} bytes of PCM exceed the 4 GiB WAV limit",
                pcm_data.len()
            ),
        )
    })?;

    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header);
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}
