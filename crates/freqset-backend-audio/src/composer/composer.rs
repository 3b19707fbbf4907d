//! Incremental composer.

use freqset_spec::CompositionMode;

use super::processing::normalize_peak;
use crate::buffer::ToneBuffer;
use crate::error::{AudioError, AudioResult};

/// Folds tone buffers into one output buffer.
///
/// Each pushed buffer is consumed and released as soon as it has been
/// folded, so at most one per-segment buffer is alive next to the output.
#[derive(Debug)]
pub struct Composer {
    /// How buffers are combined.
    mode: CompositionMode,
    /// Sample rate of the first buffer.
    sample_rate: Option<f64>,
    /// Concatenation (sequential) or running sum (simultaneous).
    output: Vec<f64>,
    /// Number of buffers folded so far.
    count: usize,
}

impl Composer {
    /// Creates an empty composer.
    pub fn new(mode: CompositionMode) -> Self {
        Self {
            mode,
            sample_rate: None,
            output: Vec::new(),
            count: 0,
        }
    }

    /// Composition mode.
    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Number of buffers folded so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no buffer has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Folds a buffer into the output.
    ///
    /// # Errors
    /// * `InvalidParameter` if the sample rate differs from the first buffer's
    /// * `LengthMismatch` in simultaneous mode if the length differs from the
    ///   first buffer's
    pub fn push(&mut self, buffer: ToneBuffer) -> AudioResult<()> {
        let index = self.count;

        match self.sample_rate {
            None => self.sample_rate = Some(buffer.sample_rate()),
            Some(rate) if rate != buffer.sample_rate() => {
                return Err(AudioError::invalid_param(
                    "sample_rate",
                    format!(
                        "buffer {} has sample rate {}, expected {}",
                        index,
                        buffer.sample_rate(),
                        rate
                    ),
                ));
            }
            Some(_) => {}
        }

        match self.mode {
            CompositionMode::Sequential => {
                if index == 0 {
                    self.output = buffer.into_samples();
                } else {
                    self.output.extend_from_slice(buffer.samples());
                }
            }
            CompositionMode::Simultaneous => {
                if index == 0 {
                    self.output = buffer.into_samples();
                } else {
                    if buffer.len() != self.output.len() {
                        return Err(AudioError::LengthMismatch {
                            index,
                            expected: self.output.len(),
                            found: buffer.len(),
                        });
                    }
                    for (acc, &sample) in self.output.iter_mut().zip(buffer.samples()) {
                        *acc += sample;
                    }
                }
            }
        }

        self.count += 1;
        Ok(())
    }

    /// Produces the composed buffer.
    ///
    /// # Errors
    /// * `EmptyInput` if nothing was pushed
    pub fn finish(self) -> AudioResult<ToneBuffer> {
        let sample_rate = self.sample_rate.ok_or(AudioError::EmptyInput)?;
        let mut output = self.output;

        if self.mode == CompositionMode::Simultaneous {
            normalize_peak(&mut output);
        }

        Ok(ToneBuffer::new(output, sample_rate))
    }
}

/// Composes buffers in one call.
///
/// # Example
/// ```
/// use freqset_backend_audio::{compose, ToneBuffer};
/// use freqset_spec::CompositionMode;
///
/// let a = ToneBuffer::new(vec![0.5, 0.5], 8000.0);
/// let b = ToneBuffer::new(vec![0.5, -0.5], 8000.0);
/// let mixed = compose(vec![a, b], CompositionMode::Simultaneous).unwrap();
/// assert_eq!(mixed.samples(), &[1.0, 0.0]);
/// ```
pub fn compose(buffers: Vec<ToneBuffer>, mode: CompositionMode) -> AudioResult<ToneBuffer> {
    let mut composer = Composer::new(mode);
    for buffer in buffers {
        composer.push(buffer)?;
    }
    composer.finish()
}
