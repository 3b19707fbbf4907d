//! Peak measurement and normalization.

/// Largest absolute sample value, 0.0 for empty input.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Divides every sample by the peak absolute value.
///
/// Afterwards the peak is exactly 1.0. Silent input is left untouched.
/// Returns the peak found before scaling.
pub fn normalize_peak(samples: &mut [f64]) -> f64 {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= current_peak;
        }
    }
    current_peak
}
