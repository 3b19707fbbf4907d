//! FreqSet Audio Backend
//!
//! This crate renders frequency sets into fixed-point audio.
//!
//! # Overview
//!
//! A frequency set such as `"144,160-180=60,10000"` describes an ordered list
//! of segments, each a fixed tone or a linear sweep with its own duration.
//! Rendering runs five stages:
//!
//! - **Parsing** - the frequency set becomes [`Segment`](freqset_spec::Segment)s
//! - **Limiting** - each endpoint is folded down by octaves below the
//!   waveform's safe ceiling ([`limiter`])
//! - **Synthesis** - each segment becomes a linear chirp shaped by one of
//!   seven waveforms ([`synthesis`], [`oscillator`])
//! - **Composition** - segments are concatenated or summed and peak
//!   normalized ([`composer`])
//! - **Quantization** - samples become 16, 24 or 32-bit integers ([`quantize`])
//!
//! # Determinism
//!
//! There is no randomness anywhere in the pipeline. The same parameters yield
//! byte-identical WAV output, and [`WavResult::pcm_hash`] can be compared
//! across runs.
//!
//! # Example
//!
//! ```no_run
//! use freqset_backend_audio::generate_wav;
//! use freqset_spec::GenerationParams;
//!
//! let params = GenerationParams::new("144,160-180=60").waveform("triangle");
//! let (result, wav) = generate_wav(&params)?;
//!
//! std::fs::write("output.wav", &wav.wav_data)?;
//! println!("{} samples, PCM hash {}", result.num_samples(), wav.pcm_hash);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod buffer;
pub mod composer;
pub mod error;
pub mod generate;
pub mod limiter;
pub mod oscillator;
pub mod quantize;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, ToneBuffer};
pub use composer::{compose, Composer};
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, generate_wav, plan, GenerateResult, GenerationPlan, GenerationWarning, SegmentReport,
};
pub use limiter::{limit, limit_segment, FrequencyCorrection};
pub use oscillator::Shape;
pub use quantize::{dequantize, quantize};
pub use synthesis::synthesize;
pub use wav::WavResult;
