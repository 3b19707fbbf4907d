//! Composition of per-segment buffers into one buffer.
//!
//! Sequential composition concatenates buffers in order. Simultaneous
//! composition sums equal-length buffers sample by sample and rescales the sum
//! so its peak magnitude is exactly 1.0.

#[allow(clippy::module_inception)]
mod composer;
mod processing;

#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_sequential;
#[cfg(test)]
mod tests_simultaneous;

pub use composer::{compose, Composer};
pub use processing::{normalize_peak, peak};
