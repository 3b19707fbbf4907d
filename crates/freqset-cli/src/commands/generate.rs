//! Generate command implementation
//!
//! Renders a frequency set into a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use freqset_backend_audio::{generate_wav, WavResult};
use freqset_spec::{
    validate_params, CompositionMode, GenerationParams, IntegerSampleFormat,
    DEFAULT_DWELL_SECONDS, DEFAULT_FREQUENCIES, DEFAULT_SAMPLE_RATE, DEFAULT_WAVEFORM,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::exit_codes::{GENERATION_FAILED, INVALID_INPUT};
use super::json_output::{
    audio_error_to_json, error_codes, input_error_to_json, print_json, validation_error_to_json,
    validation_warning_to_json, GenerateOutput, GenerateResultJson, JsonError, SegmentJson,
};
use super::reporting;
use crate::input::load_params;

/// Output formats accepted by `--format`. Only `wav` is produced; the others
/// are recognized so they can be rejected with a clear message.
pub const OUTPUT_FORMATS: &[&str] = &["wav", "mp3", "flac", "alac"];

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "output.wav";

/// Options of the generate command.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Frequency-set string
    pub frequencies: String,
    /// Waveform identifier
    pub waveform: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Default dwell in seconds
    pub dwell: f64,
    /// Sum all segments instead of playing them in turn
    pub merge: bool,
    /// Bits per output sample
    pub bits: u16,
    /// Peak amplitude in [0, 1]
    pub amplitude: f64,
    /// Output container format
    pub format: String,
    /// Output file path
    pub output: String,
    /// Params file; when set, replaces every parameter flag
    pub params: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            frequencies: DEFAULT_FREQUENCIES.to_string(),
            waveform: DEFAULT_WAVEFORM.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            dwell: DEFAULT_DWELL_SECONDS,
            merge: false,
            bits: 16,
            amplitude: 1.0,
            format: "wav".to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            params: None,
        }
    }
}

impl GenerateOptions {
    /// Builds generation parameters from the flags.
    pub fn to_params(&self) -> Result<GenerationParams, JsonError> {
        let sample_format = IntegerSampleFormat::from_bits(self.bits).ok_or_else(|| {
            JsonError::new(
                error_codes::UNSUPPORTED_BIT_DEPTH,
                format!("unsupported bit depth {} (expected 16, 24 or 32)", self.bits),
            )
            .with_path("bits")
        })?;

        Ok(GenerationParams::new(self.frequencies.clone())
            .waveform(self.waveform.clone())
            .sample_rate(self.sample_rate)
            .default_dwell(self.dwell)
            .mode(CompositionMode::from_merge(self.merge))
            .sample_format(sample_format)
            .amplitude(self.amplitude))
    }
}

/// Parameters resolved from flags or a params file.
struct Resolved {
    params: GenerationParams,
    source_hash: Option<String>,
}

/// Rejects container formats other than WAV.
fn check_format(format: &str) -> Result<(), JsonError> {
    match format.to_ascii_lowercase().as_str() {
        "wav" => Ok(()),
        other => Err(JsonError::new(
            error_codes::UNSUPPORTED_FORMAT,
            format!(
                "output format '{}' is not supported; only wav output is available",
                other
            ),
        )
        .with_path("format")),
    }
}

fn resolve(options: &GenerateOptions) -> Result<Resolved, JsonError> {
    check_format(&options.format)?;

    match &options.params {
        Some(path) => {
            let loaded = load_params(Path::new(path))
                .map_err(|e| input_error_to_json(&e, Some(path.as_str())))?;
            Ok(Resolved {
                params: loaded.params,
                source_hash: Some(loaded.source_hash),
            })
        }
        None => Ok(Resolved {
            params: options.to_params()?,
            source_hash: None,
        }),
    }
}

/// Writes the WAV file, creating parent directories as needed.
fn write_output(path: &Path, wav: &WavResult) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, &wav.wav_data)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 for invalid input, 2 if generation or writing
/// the output failed
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();

    let Resolved { params, .. } = match resolve(options) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("{} [{}]: {}", "error".red().bold(), err.code, err.message);
            return Ok(ExitCode::from(INVALID_INPUT));
        }
    };

    println!("{} {}", "Generating:".cyan().bold(), params.frequencies);
    println!(
        "{} {}, {} Hz, {}, {}",
        "Settings:".dimmed(),
        params.waveform,
        params.sample_rate,
        params.mode,
        params.sample_format
    );

    let validation = validate_params(&params);
    if !validation.is_ok() {
        reporting::print_validation_failure(&validation);
        return Ok(ExitCode::from(INVALID_INPUT));
    }

    let (result, wav) = match generate_wav(&params) {
        Ok(generated) => generated,
        Err(err) => {
            reporting::print_backend_error(err);
            return Ok(ExitCode::from(GENERATION_FAILED));
        }
    };

    reporting::print_segments(&result.segments);
    reporting::print_warnings(&result.warnings);

    write_output(Path::new(&options.output), &wav)?;

    println!("Generated audio saved to {}", options.output);
    println!(
        "  {} {} samples, {:.2}s, {}-bit, PCM {} ({} ms)",
        "->".green(),
        result.num_samples(),
        result.duration_seconds(),
        wav.bits_per_sample,
        &wav.pcm_hash[..16],
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let Resolved {
        params,
        source_hash,
    } = match resolve(options) {
        Ok(resolved) => resolved,
        Err(err) => {
            print_json(&GenerateOutput::failure(vec![err], Vec::new(), None))?;
            return Ok(ExitCode::from(INVALID_INPUT));
        }
    };

    let validation = validate_params(&params);
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(validation_error_to_json).collect();
        let warnings = validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect();
        print_json(&GenerateOutput::failure(errors, warnings, source_hash))?;
        return Ok(ExitCode::from(INVALID_INPUT));
    }

    let (result, wav) = match generate_wav(&params) {
        Ok(generated) => generated,
        Err(err) => {
            let output =
                GenerateOutput::failure(vec![audio_error_to_json(&err)], Vec::new(), source_hash);
            print_json(&output)?;
            return Ok(ExitCode::from(GENERATION_FAILED));
        }
    };

    let warnings = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if let Err(err) = write_output(Path::new(&options.output), &wav) {
        let error = JsonError::new(error_codes::OUTPUT_WRITE, format!("{:#}", err))
            .with_file(options.output.as_str());
        print_json(&GenerateOutput::failure(vec![error], warnings, source_hash))?;
        return Ok(ExitCode::from(GENERATION_FAILED));
    }

    let details = GenerateResultJson {
        output_path: options.output.clone(),
        pcm_hash: wav.pcm_hash.clone(),
        waveform: result.waveform.to_string(),
        mode: result.mode.to_string(),
        sample_rate: result.sample_rate,
        bits_per_sample: wav.bits_per_sample,
        num_samples: result.num_samples(),
        duration_seconds: result.duration_seconds(),
        segments: result.segments.iter().map(SegmentJson::from).collect(),
    };
    print_json(&GenerateOutput::success(details, warnings, source_hash))?;

    Ok(ExitCode::SUCCESS)
}
