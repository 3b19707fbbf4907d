//! Tests for simultaneous composition.

use freqset_spec::CompositionMode;

use super::*;
use crate::buffer::ToneBuffer;
use crate::error::AudioError;

fn buffer(samples: &[f64]) -> ToneBuffer {
    ToneBuffer::new(samples.to_vec(), 48000.0)
}

#[test]
fn test_simultaneous_sums_and_normalizes() {
    let out = compose(
        vec![buffer(&[0.5, 0.25, -0.5]), buffer(&[0.5, -0.25, -0.5])],
        CompositionMode::Simultaneous,
    )
    .unwrap();

    assert_eq!(out.samples(), &[1.0, 0.0, -1.0]);
}

#[test]
fn test_simultaneous_peak_is_exactly_one() {
    let a: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
    let b: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin() * 0.3).collect();
    let c: Vec<f64> = (0..100).map(|i| ((i % 7) as f64) / 7.0).collect();

    let out = compose(
        vec![buffer(&a), buffer(&b), buffer(&c)],
        CompositionMode::Simultaneous,
    )
    .unwrap();
    assert_eq!(out.peak(), 1.0);
    assert_eq!(out.len(), 100);
}

#[test]
fn test_simultaneous_single_buffer_is_normalized() {
    let out = compose(vec![buffer(&[0.2, -0.1])], CompositionMode::Simultaneous).unwrap();
    assert_eq!(out.samples(), &[1.0, -0.5]);
}

#[test]
fn test_simultaneous_silence_stays_silent() {
    let out = compose(
        vec![buffer(&[0.5, -0.5]), buffer(&[-0.5, 0.5])],
        CompositionMode::Simultaneous,
    )
    .unwrap();
    assert!(out.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn test_simultaneous_length_mismatch() {
    let err = compose(
        vec![buffer(&[0.0; 4]), buffer(&[0.0; 4]), buffer(&[0.0; 3])],
        CompositionMode::Simultaneous,
    )
    .unwrap_err();

    match err {
        AudioError::LengthMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 2);
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected error: {}", other),
    }
}
