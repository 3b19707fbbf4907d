//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod segments;
pub mod waveforms;

mod reporting;

/// Process exit codes shared by all commands.
pub mod exit_codes {
    /// Command completed.
    pub const SUCCESS: u8 = 0;
    /// Parameters or the frequency set were rejected.
    pub const INVALID_INPUT: u8 = 1;
    /// Synthesis or writing the output failed.
    pub const GENERATION_FAILED: u8 = 2;
}
