//! FreqSet CLI - Command-line interface for frequency-set audio generation
//!
//! This binary renders frequency sets to WAV files and inspects how they will
//! be parsed and limited.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use freqset_cli::commands;
use freqset_cli::commands::exit_codes::GENERATION_FAILED;
use freqset_cli::commands::generate::{GenerateOptions, DEFAULT_OUTPUT};
use freqset_spec::{
    DEFAULT_DWELL_SECONDS, DEFAULT_FREQUENCIES, DEFAULT_SAMPLE_RATE, DEFAULT_WAVEFORM,
};

/// FreqSet - Frequency-Set Audio Synthesis
#[derive(Parser)]
#[command(name = "freqset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a frequency set to a WAV file
    Generate {
        /// Frequency set, e.g. "144,160-180=60,10000"
        #[arg(short, long, default_value = DEFAULT_FREQUENCIES, allow_hyphen_values = true)]
        frequencies: String,

        /// Waveform (pulse, lilly, square, sawtooth, reverse_sawtooth, triangle, sine)
        #[arg(short, long, default_value = DEFAULT_WAVEFORM)]
        waveform: String,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Default dwell per segment in seconds
        #[arg(short, long, default_value_t = DEFAULT_DWELL_SECONDS)]
        dwell: f64,

        /// Play all segments at once instead of one after another
        #[arg(long)]
        merge: bool,

        /// Bits per sample (16, 24 or 32)
        #[arg(long, default_value_t = 16)]
        bits: u16,

        /// Peak amplitude in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,

        /// Output format
        #[arg(long, default_value = "wav", value_parser = ["wav", "mp3", "flac", "alac"])]
        format: String,

        /// Output file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// JSON params file; replaces every parameter flag
        #[arg(short, long)]
        params: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show parsed and limited segments without synthesizing
    Segments {
        /// Frequency set, e.g. "144,160-180=60,10000"
        #[arg(short, long, default_value = DEFAULT_FREQUENCIES, allow_hyphen_values = true)]
        frequencies: String,

        /// Waveform identifier
        #[arg(short, long, default_value = DEFAULT_WAVEFORM)]
        waveform: String,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Default dwell per segment in seconds
        #[arg(short, long, default_value_t = DEFAULT_DWELL_SECONDS)]
        dwell: f64,

        /// Show segments as they would be summed
        #[arg(long)]
        merge: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List waveform kinds and their frequency ceilings
    Waveforms {
        /// Sample rate the ceilings are computed for
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            frequencies,
            waveform,
            sample_rate,
            dwell,
            merge,
            bits,
            amplitude,
            format,
            output,
            params,
            json,
        } => {
            let options = GenerateOptions {
                frequencies,
                waveform,
                sample_rate,
                dwell,
                merge,
                bits,
                amplitude,
                format,
                output,
                params,
            };
            commands::generate::run(&options, json)
        }
        Commands::Segments {
            frequencies,
            waveform,
            sample_rate,
            dwell,
            merge,
            json,
        } => commands::segments::run(&frequencies, &waveform, sample_rate, dwell, merge, json),
        Commands::Waveforms { sample_rate, json } => commands::waveforms::run(sample_rate, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(GENERATION_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["freqset", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                frequencies,
                waveform,
                sample_rate,
                dwell,
                merge,
                bits,
                format,
                output,
                params,
                json,
                ..
            } => {
                assert_eq!(frequencies, "144,160,1.2,520,10,10000,304");
                assert_eq!(waveform, "pulse");
                assert_eq!(sample_rate, 48000);
                assert_eq!(dwell, 180.0);
                assert!(!merge);
                assert_eq!(bits, 16);
                assert_eq!(format, "wav");
                assert_eq!(output, "output.wav");
                assert!(params.is_none());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "freqset",
            "generate",
            "-f",
            "160-180=60",
            "-w",
            "triangle",
            "-r",
            "96000",
            "-d",
            "30",
            "--merge",
            "--bits",
            "24",
            "-o",
            "out/tone.wav",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                frequencies,
                waveform,
                sample_rate,
                dwell,
                merge,
                bits,
                output,
                json,
                ..
            } => {
                assert_eq!(frequencies, "160-180=60");
                assert_eq!(waveform, "triangle");
                assert_eq!(sample_rate, 96000);
                assert_eq!(dwell, 30.0);
                assert!(merge);
                assert_eq!(bits, 24);
                assert_eq!(output, "out/tone.wav");
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["freqset", "generate", "--format", "ogg"]).is_err());
        assert!(Cli::try_parse_from(["freqset", "generate", "--format", "mp3"]).is_ok());
    }

    #[test]
    fn test_cli_parses_segments() {
        let cli =
            Cli::try_parse_from(["freqset", "segments", "-f", "520-555=60", "-w", "sine"]).unwrap();
        match cli.command {
            Commands::Segments {
                frequencies,
                waveform,
                merge,
                json,
                ..
            } => {
                assert_eq!(frequencies, "520-555=60");
                assert_eq!(waveform, "sine");
                assert!(!merge);
                assert!(!json);
            }
            _ => panic!("expected segments command"),
        }
    }

    #[test]
    fn test_cli_parses_waveforms() {
        let cli = Cli::try_parse_from(["freqset", "waveforms", "-r", "96000", "--json"]).unwrap();
        match cli.command {
            Commands::Waveforms { sample_rate, json } => {
                assert_eq!(sample_rate, 96000);
                assert!(json);
            }
            _ => panic!("expected waveforms command"),
        }
    }
}
