//! Tests for sequential composition.

use freqset_spec::CompositionMode;
use pretty_assertions::assert_eq;

use super::*;
use crate::buffer::ToneBuffer;
use crate::error::AudioError;

fn buffer(samples: &[f64]) -> ToneBuffer {
    ToneBuffer::new(samples.to_vec(), 8000.0)
}

#[test]
fn test_sequential_concatenates_in_order() {
    let out = compose(
        vec![buffer(&[0.1, 0.2]), buffer(&[0.3]), buffer(&[0.4, 0.5, 0.6])],
        CompositionMode::Sequential,
    )
    .unwrap();

    assert_eq!(out.samples(), &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    assert_eq!(out.sample_rate(), 8000.0);
}

#[test]
fn test_sequential_does_not_normalize() {
    let out = compose(
        vec![buffer(&[0.25, -0.25]), buffer(&[0.5])],
        CompositionMode::Sequential,
    )
    .unwrap();
    assert_eq!(out.peak(), 0.5);
}

#[test]
fn test_sequential_accepts_unequal_lengths() {
    let mut composer = Composer::new(CompositionMode::Sequential);
    composer.push(buffer(&[1.0; 3])).unwrap();
    composer.push(buffer(&[1.0; 7])).unwrap();
    assert_eq!(composer.len(), 2);
    assert_eq!(composer.finish().unwrap().len(), 10);
}

#[test]
fn test_empty_input() {
    let err = compose(Vec::new(), CompositionMode::Sequential).unwrap_err();
    assert!(matches!(err, AudioError::EmptyInput));

    let composer = Composer::new(CompositionMode::Simultaneous);
    assert!(composer.is_empty());
    assert!(matches!(composer.finish(), Err(AudioError::EmptyInput)));
}

#[test]
fn test_mixed_sample_rates_rejected() {
    let mut composer = Composer::new(CompositionMode::Sequential);
    composer.push(ToneBuffer::new(vec![0.0], 48000.0)).unwrap();
    let err = composer
        .push(ToneBuffer::new(vec![0.0], 44100.0))
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "sample_rate"));
}
