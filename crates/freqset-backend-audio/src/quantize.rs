//! Conversion of real-valued samples to fixed-point integers.

use freqset_spec::IntegerSampleFormat;

use crate::buffer::{AudioBuffer, ToneBuffer};
use crate::error::{AudioError, AudioResult};

/// Quantizes a buffer of samples in [-1, 1] to `format`.
///
/// Each sample becomes `round(s * format.scale())`, clamped to the format's
/// integer range, so out-of-range input saturates rather than wrapping.
///
/// # Errors
/// * `NonFiniteSample` for the first NaN or infinite sample
/// * `InvalidSampleRate` if the buffer's rate is not a positive whole number
///   of Hz that fits in a `u32`
pub fn quantize(buffer: &ToneBuffer, format: IntegerSampleFormat) -> AudioResult<AudioBuffer> {
    let rate = buffer.sample_rate();
    if !(rate.is_finite() && rate >= 1.0 && rate <= u32::MAX as f64 && rate.fract() == 0.0) {
        return Err(AudioError::InvalidSampleRate { rate });
    }

    let scale = format.scale();
    let min = format.min_value() as f64;
    let max = format.max_value() as f64;

    let samples = buffer
        .samples()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if !value.is_finite() {
                return Err(AudioError::NonFiniteSample { index, value });
            }
            Ok((value * scale).round().clamp(min, max) as i32)
        })
        .collect::<AudioResult<Vec<i32>>>()?;

    Ok(AudioBuffer::new(samples, format, rate as u32))
}

/// Maps a quantized value back to [-1, 1].
pub fn dequantize(value: i32, format: IntegerSampleFormat) -> f64 {
    value as f64 / format.scale()
}
