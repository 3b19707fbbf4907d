//! Tests for peak normalization.

use super::*;

#[test]
fn test_normalize_peak_basic() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    let before = normalize_peak(&mut samples);

    assert_eq!(before, 0.8);
    assert_eq!(peak(&samples), 1.0);
    assert!((samples[0] - 0.625).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0, 0.0, 0.0, 0.0];
    assert_eq!(normalize_peak(&mut samples), 0.0);

    // Silent audio should remain silent (no division by zero)
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_loud_audio() {
    let mut samples = vec![2.0, -1.5, 3.0, -2.5];
    normalize_peak(&mut samples);
    assert_eq!(peak(&samples), 1.0);
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.1, -4.0, 2.0];
    normalize_peak(&mut samples);
    assert_eq!(samples[1], -1.0);
    assert_eq!(samples[2], 0.5);
}

#[test]
fn test_peak_of_empty_slice() {
    assert_eq!(peak(&[]), 0.0);
}
