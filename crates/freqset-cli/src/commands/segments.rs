//! Segments command implementation
//!
//! Shows how a frequency set will be parsed and limited, without
//! synthesizing anything.

use anyhow::Result;
use colored::Colorize;
use freqset_backend_audio::plan;
use freqset_spec::{validate_params, CompositionMode, GenerationParams};
use std::process::ExitCode;

use super::exit_codes::INVALID_INPUT;
use super::json_output::{
    audio_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    SegmentJson, SegmentsOutput,
};
use super::reporting;

/// Run the segments command
///
/// # Arguments
/// * `frequencies` - Frequency-set string
/// * `waveform` - Waveform identifier
/// * `sample_rate` - Sample rate in Hz
/// * `dwell` - Default dwell in seconds
/// * `merge` - Whether segments would be summed
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the frequency set is valid, 1 otherwise
pub fn run(
    frequencies: &str,
    waveform: &str,
    sample_rate: u32,
    dwell: f64,
    merge: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let params = GenerationParams::new(frequencies)
        .waveform(waveform)
        .sample_rate(sample_rate)
        .default_dwell(dwell)
        .mode(CompositionMode::from_merge(merge));

    let validation = validate_params(&params);
    if !validation.is_ok() {
        if json_output {
            print_json(&SegmentsOutput {
                success: false,
                errors: validation.errors.iter().map(validation_error_to_json).collect(),
                warnings: validation
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect(),
                waveform: None,
                num_samples: None,
                segments: Vec::new(),
            })?;
        } else {
            reporting::print_validation_failure(&validation);
        }
        return Ok(ExitCode::from(INVALID_INPUT));
    }

    let planned = match plan(&params) {
        Ok(planned) => planned,
        Err(err) => {
            if json_output {
                print_json(&SegmentsOutput {
                    success: false,
                    errors: vec![audio_error_to_json(&err)],
                    warnings: Vec::new(),
                    waveform: None,
                    num_samples: None,
                    segments: Vec::new(),
                })?;
            } else {
                reporting::print_backend_error(err);
            }
            return Ok(ExitCode::from(INVALID_INPUT));
        }
    };

    if json_output {
        print_json(&SegmentsOutput {
            success: true,
            errors: Vec::new(),
            warnings: planned
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect(),
            waveform: Some(planned.waveform.to_string()),
            num_samples: Some(planned.num_samples()),
            segments: planned.segments.iter().map(SegmentJson::from).collect(),
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} segment(s), {} at {} Hz, {}",
        "Segments:".cyan().bold(),
        planned.segments.len(),
        planned.waveform,
        planned.sample_rate,
        planned.mode
    );
    reporting::print_segments(&planned.segments);
    reporting::print_warnings(&planned.warnings);

    let num_samples = planned.num_samples();
    println!(
        "{} {} samples ({:.2}s)",
        "Total:".dimmed(),
        num_samples,
        num_samples as f64 / planned.sample_rate as f64
    );

    Ok(ExitCode::SUCCESS)
}
