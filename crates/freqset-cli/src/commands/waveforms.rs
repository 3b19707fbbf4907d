//! Waveforms command implementation
//!
//! Lists the waveform kinds and their frequency ceilings.

use anyhow::Result;
use colored::Colorize;
use freqset_spec::WaveformKind;
use std::process::ExitCode;

use super::exit_codes::INVALID_INPUT;
use super::json_output::{print_json, WaveformJson, WaveformsOutput};

/// Builds the listing for a sample rate.
pub fn listing(sample_rate: u32) -> WaveformsOutput {
    let rate = sample_rate as f64;
    WaveformsOutput {
        sample_rate,
        waveforms: WaveformKind::ALL
            .iter()
            .map(|kind| WaveformJson {
                name: kind.as_str().to_string(),
                nyquist_fraction: kind.nyquist_fraction(),
                max_frequency: kind.max_frequency(rate),
                unipolar: kind.is_unipolar(),
            })
            .collect(),
    }
}

/// Run the waveforms command
pub fn run(sample_rate: u32, json_output: bool) -> Result<ExitCode> {
    if sample_rate == 0 {
        eprintln!("{}: sample rate must be positive", "error".red().bold());
        return Ok(ExitCode::from(INVALID_INPUT));
    }

    let output = listing(sample_rate);
    if json_output {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} (ceilings at {} Hz)", "Waveforms:".cyan().bold(), sample_rate);
    for waveform in &output.waveforms {
        println!(
            "  {:<18} 1/{:<4} {:>10} Hz{}",
            waveform.name,
            (1.0 / waveform.nyquist_fraction).round(),
            waveform.max_frequency,
            if waveform.unipolar {
                "  (unipolar)".dimmed().to_string()
            } else {
                String::new()
            }
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_in_menu_order() {
        let output = listing(48_000);
        let names: Vec<&str> = output.waveforms.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "pulse",
                "lilly",
                "square",
                "sawtooth",
                "reverse_sawtooth",
                "triangle",
                "sine"
            ]
        );
    }

    #[test]
    fn test_listing_ceilings() {
        let output = listing(48_000);
        let ceiling = |name: &str| {
            output
                .waveforms
                .iter()
                .find(|w| w.name == name)
                .map(|w| w.max_frequency)
                .unwrap()
        };
        assert_eq!(ceiling("sine"), 2400.0);
        assert_eq!(ceiling("lilly"), 2400.0);
        assert_eq!(ceiling("triangle"), 6000.0);
        assert_eq!(ceiling("pulse"), 12000.0);
        assert_eq!(ceiling("square"), 24000.0);
        assert!(output.waveforms.iter().filter(|w| w.unipolar).count() == 1);
    }

    #[test]
    fn test_zero_sample_rate_is_invalid() {
        assert_eq!(run(0, true).unwrap(), ExitCode::from(INVALID_INPUT));
    }
}
