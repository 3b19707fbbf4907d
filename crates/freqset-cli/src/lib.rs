//! FreqSet CLI library.
//!
//! This crate provides the core functionality for the `freqset` binary:
//! loading parameter files and the `generate`, `segments` and `waveforms`
//! commands.

pub mod commands;
pub mod input;
