//! Deterministic WAV container writer.
//!
//! Writes canonical 44-byte-header mono PCM files with no timestamps or other
//! variable metadata, so identical audio always yields identical bytes. The
//! BLAKE3 hash of the PCM payload identifies a rendering.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::{max_samples, WavFormat, WAV_HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{wav_header, write_wav, write_wav_to_vec};
