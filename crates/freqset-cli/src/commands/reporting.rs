//! Colored terminal output shared by the commands.

use colored::Colorize;
use freqset_backend_audio::{FrequencyCorrection, SegmentReport};
use freqset_spec::{BackendError, GenerationError, ValidationResult, ValidationWarning};

/// Prints one line per segment, followed by its corrections.
pub(super) fn print_segments(segments: &[SegmentReport]) {
    for report in segments {
        println!("  {}", report.requested);

        if report.frequency_adjusted() {
            let correction = FrequencyCorrection {
                requested: report.requested,
                applied: report.applied,
            };
            println!("    {} {}", "~".yellow(), correction);
        }
        if report.duration_adjusted() {
            println!(
                "    {} {}",
                "~".yellow(),
                format!(
                    "Duration {} sec replaced by shared duration {} sec",
                    report.requested.duration(),
                    report.applied.duration()
                )
                .dimmed()
            );
        }
    }
}

/// Prints warnings with their codes.
pub(super) fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!("  {} {}: {}", "!".yellow(), warning.code, warning.message);
    }
}

/// Prints the errors and warnings of a failed validation.
pub(super) fn print_validation_failure(result: &ValidationResult) {
    println!("{}", "Invalid parameters:".red().bold());
    for error in &result.errors {
        let location = error
            .path
            .as_ref()
            .map(|p| format!(" ({})", p))
            .unwrap_or_default();
        println!(
            "  {} {}{}: {}",
            "x".red(),
            error.code,
            location.dimmed(),
            error.message
        );
    }
    print_warnings(&result.warnings);
}

/// Prints a backend failure with its code and category.
pub(super) fn print_backend_error<E: BackendError + Send + Sync + 'static>(err: E) {
    let err = GenerationError::from_backend(err);
    eprintln!("{} ({}): {}", "error".red().bold(), err.category, err);
}
