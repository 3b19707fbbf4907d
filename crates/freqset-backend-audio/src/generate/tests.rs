//! Tests for the generation pipeline.

use freqset_spec::{
    CompositionMode, GenerationParams, IntegerSampleFormat, WarningCode, WaveformKind,
};
use pretty_assertions::assert_eq;

use super::*;

fn params(frequencies: &str) -> GenerationParams {
    GenerationParams::new(frequencies)
        .sample_rate(8000)
        .default_dwell(0.5)
}

#[test]
fn test_sequential_length_is_sum_of_segments() {
    let result = generate(&params("100,200=0.25,300-400").waveform("sine")).unwrap();

    assert_eq!(result.num_samples(), 4000 + 2000 + 4000);
    assert_eq!(result.sample_rate, 8000);
    assert_eq!(result.waveform, WaveformKind::Sine);
    assert_eq!(result.mode, CompositionMode::Sequential);
    assert_eq!(result.segments.len(), 3);
    assert_eq!(
        result.segments.iter().map(|r| r.num_samples).collect::<Vec<_>>(),
        vec![4000, 2000, 4000]
    );
    assert!(result.warnings.is_empty());
    assert!((result.duration_seconds() - 1.25).abs() < 1e-12);
}

#[test]
fn test_segment_reports_record_corrections() {
    let result = generate(&params("100,1000").waveform("sine")).unwrap();

    // Sine ceiling at 8 kHz is 400 Hz.
    let report = &result.segments[1];
    assert_eq!(report.index, 1);
    assert_eq!(report.requested.start_frequency(), 1000.0);
    assert_eq!(report.applied.start_frequency(), 250.0);
    assert!(report.frequency_adjusted());
    assert!(!report.duration_adjusted());
    assert!(!result.segments[0].frequency_adjusted());
}

#[test]
fn test_unknown_waveform_falls_back_to_sine() {
    let result = generate(&params("100").waveform("kazoo")).unwrap();

    assert_eq!(result.waveform, WaveformKind::Sine);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, WarningCode::UnknownWaveform);
}

#[test]
fn test_simultaneous_uses_first_duration() {
    let result = generate(
        &params("100=0.25,150=1,200")
            .waveform("triangle")
            .mode(CompositionMode::Simultaneous),
    )
    .unwrap();

    assert_eq!(result.num_samples(), 2000);
    assert!(result.segments.iter().all(|r| r.num_samples == 2000));
    assert!(result.segments[1].duration_adjusted());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, WarningCode::UnequalDurationsIgnored);
}

#[test]
fn test_simultaneous_peak_reaches_full_scale() {
    let result = generate(
        &params("100,150,200")
            .waveform("sine")
            .mode(CompositionMode::Simultaneous),
    )
    .unwrap();

    let peak = result.audio.samples().iter().map(|s| s.abs()).max().unwrap();
    assert_eq!(peak, 32767);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_amplitude_scales_sequential_output() {
    let result = generate(&params("100").waveform("square").amplitude(0.5)).unwrap();
    let peak = result.audio.samples().iter().map(|s| s.abs()).max().unwrap();
    assert_eq!(peak, 16384);
}

#[test]
fn test_sample_format_selects_width() {
    let result = generate(
        &params("100")
            .waveform("square")
            .sample_format(IntegerSampleFormat::Int24),
    )
    .unwrap();
    assert_eq!(result.audio.format(), IntegerSampleFormat::Int24);
    assert_eq!(result.audio.samples()[0], 8_388_607);
}

#[test]
fn test_invalid_scalar_params() {
    assert!(matches!(
        generate(&params("100").sample_rate(0)),
        Err(AudioError::InvalidSampleRate { .. })
    ));
    assert!(matches!(
        generate(&params("100").default_dwell(0.0)),
        Err(AudioError::InvalidDuration { .. })
    ));
    assert!(matches!(
        generate(&params("100").default_dwell(f64::NAN)),
        Err(AudioError::InvalidDuration { .. })
    ));
    assert!(matches!(
        generate(&params("100").amplitude(1.5)),
        Err(AudioError::InvalidParameter { .. })
    ));
    assert!(matches!(
        generate(&params("100").amplitude(-0.1)),
        Err(AudioError::InvalidParameter { .. })
    ));
}

#[test]
fn test_parse_failures() {
    assert!(matches!(
        generate(&params("100,abc")),
        Err(AudioError::Parse(_))
    ));
    assert!(matches!(
        generate(&params("100=0")),
        Err(AudioError::InvalidDuration { .. })
    ));
    assert!(matches!(generate(&params(" , ,")), Err(AudioError::EmptyInput)));
}

#[test]
fn test_segment_shorter_than_one_sample() {
    assert!(matches!(
        generate(&params("100=0.0001")),
        Err(AudioError::InvalidDuration { .. })
    ));
}

#[test]
fn test_generate_wav() {
    let (result, wav) = generate_wav(&params("100,200")).unwrap();
    assert_eq!(wav.num_samples, result.num_samples());
    assert_eq!(wav.sample_rate, 8000);
    assert_eq!(wav.bits_per_sample, 16);
    assert_eq!(wav.wav_data.len(), 44 + result.num_samples() * 2);
}

#[test]
fn test_generation_is_deterministic() {
    let p = params("144,160-180=0.3,10000").waveform("lilly");
    let (_, a) = generate_wav(&p).unwrap();
    let (_, b) = generate_wav(&p).unwrap();
    assert_eq!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_plan_matches_generated_length() {
    let p = params("100,200=0.25,5000-6000");
    let planned = plan(&p).unwrap();
    let generated = generate(&p).unwrap();

    assert_eq!(planned.num_samples(), generated.num_samples());
    assert_eq!(planned.segments, generated.segments);
    assert_eq!(planned.waveform, WaveformKind::Pulse);
}

#[test]
fn test_plan_simultaneous_length_is_first_segment() {
    let p = params("100=0.25,200=2").mode(CompositionMode::Simultaneous);
    let planned = plan(&p).unwrap();
    assert_eq!(planned.num_samples(), 2000);
    assert_eq!(planned.segments[1].applied.duration(), 0.25);
    assert_eq!(planned.segments[1].requested.duration(), 2.0);
}

#[test]
fn test_astronomical_dwell_is_invalid_duration() {
    assert!(matches!(
        generate(&GenerationParams::new("144=1e300")),
        Err(AudioError::InvalidDuration { duration }) if duration == 1e300
    ));
    assert!(matches!(
        plan(&GenerationParams::new("144=1e300,160=1e300")),
        Err(AudioError::InvalidDuration { .. })
    ));
}

#[test]
fn test_sequential_total_must_fit_wav_payload() {
    // 1.44e9 samples each at 48 kHz; together they exceed a 16-bit payload.
    let long = GenerationParams::new("144=30000,160=30000");
    assert!(matches!(
        plan(&long),
        Err(AudioError::InvalidDuration { duration }) if duration == 60000.0
    ));

    let merged = plan(&long.clone().mode(CompositionMode::Simultaneous)).unwrap();
    assert_eq!(merged.num_samples(), 1_440_000_000);
}

#[test]
fn test_segment_limit_follows_sample_format() {
    let p = GenerationParams::new("144=30000");
    assert_eq!(plan(&p).unwrap().num_samples(), 1_440_000_000);
    assert!(matches!(
        plan(&p.sample_format(IntegerSampleFormat::Int32)),
        Err(AudioError::InvalidDuration { .. })
    ));
}

#[test]
fn test_plan_num_samples_saturates() {
    let segment = Segment::fixed(144.0, 1.0).unwrap();
    let report = SegmentReport {
        index: 0,
        requested: segment,
        applied: segment,
        num_samples: usize::MAX,
    };
    let planned = GenerationPlan {
        waveform: WaveformKind::Sine,
        mode: CompositionMode::Sequential,
        sample_rate: 48000,
        segments: vec![report, SegmentReport { index: 1, ..report }],
        warnings: Vec::new(),
    };
    assert_eq!(planned.num_samples(), usize::MAX);
}
