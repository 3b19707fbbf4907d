//! End-to-end generation scenarios.

use freqset_backend_audio::{compose, generate, synthesize, AudioError, ToneBuffer};
use freqset_spec::{
    parse_frequency_set, CompositionMode, GenerationParams, IntegerSampleFormat, Segment,
    WaveformKind, DEFAULT_FREQUENCIES,
};

#[test]
fn test_default_frequency_set_with_pulse() {
    // Stands in for the full default run (7 x 180 s at 48 kHz, ignored
    // below): same seven tones and waveform with a 2 s dwell.
    let params = GenerationParams::default().default_dwell(2.0);
    let result = generate(&params).unwrap();

    assert_eq!(result.waveform, WaveformKind::Pulse);
    assert_eq!(result.segments.len(), 7);
    assert_eq!(result.num_samples(), 7 * 96_000);
    assert!(result.audio.samples().iter().all(|&s| s >= 0));
    assert!(result.audio.samples().iter().any(|&s| s == 32767));
    assert!(result.warnings.is_empty());
}

#[test]
#[ignore = "renders twenty-one minutes of audio"]
fn test_default_frequency_set_full_length() {
    let result = generate(&GenerationParams::default()).unwrap();

    assert_eq!(result.num_samples(), 7 * 180 * 48_000);
    assert!(result.audio.samples().iter().all(|&s| s >= 0));
}

#[test]
fn test_default_frequencies_parse_as_fixed_tones() {
    let segments = parse_frequency_set(DEFAULT_FREQUENCIES, 180.0).unwrap();
    let frequencies: Vec<f64> = segments.iter().map(|s| s.start_frequency()).collect();

    assert_eq!(frequencies, vec![144.0, 160.0, 1.2, 520.0, 10.0, 10000.0, 304.0]);
    assert!(segments.iter().all(|s| !s.is_sweep() && s.duration() == 180.0));
}

#[test]
fn test_sequential_sub_ranges_are_unmodified() {
    let segments = parse_frequency_set("100=0.1,220-330=0.2,50=0.05", 1.0).unwrap();
    let tones: Vec<ToneBuffer> = segments
        .iter()
        .map(|s| synthesize(s, 8000.0, WaveformKind::Sawtooth, 0.9).unwrap())
        .collect();

    let composed = compose(tones.clone(), CompositionMode::Sequential).unwrap();
    assert_eq!(
        composed.len(),
        tones.iter().map(ToneBuffer::len).sum::<usize>()
    );

    let mut offset = 0;
    for tone in &tones {
        assert_eq!(&composed.samples()[offset..offset + tone.len()], tone.samples());
        offset += tone.len();
    }
}

#[test]
fn test_simultaneous_composition_peak_is_one() {
    let tones: Vec<ToneBuffer> = [110.0, 165.0, 220.0, 275.0]
        .iter()
        .map(|&f| {
            let segment = Segment::fixed(f, 0.25).unwrap();
            synthesize(&segment, 44_100.0, WaveformKind::Triangle, 1.0).unwrap()
        })
        .collect();

    let composed = compose(tones, CompositionMode::Simultaneous).unwrap();
    assert_eq!(composed.peak(), 1.0);
}

#[test]
fn test_every_waveform_renders_at_every_width() {
    for waveform in WaveformKind::ALL {
        for format in [
            IntegerSampleFormat::Int16,
            IntegerSampleFormat::Int24,
            IntegerSampleFormat::Int32,
        ] {
            let params = GenerationParams::new("100-2000,30000")
                .waveform(waveform.as_str())
                .sample_rate(16_000)
                .default_dwell(0.1)
                .sample_format(format);
            let result = generate(&params).unwrap();

            assert_eq!(result.waveform, waveform);
            assert_eq!(result.num_samples(), 3200);
            let ceiling = waveform.max_frequency(16_000.0);
            for report in &result.segments {
                assert!(report.applied.start_frequency() <= ceiling);
                assert!(report.applied.end_frequency() <= ceiling);
            }
        }
    }
}

#[test]
fn test_negative_frequency_is_rejected() {
    let err = generate(&GenerationParams::new("144,-160").default_dwell(0.1)).unwrap_err();
    assert!(matches!(err, AudioError::Parse(_)));
}
