//! The tools module provides the pieces around the codec proper.
//!
//! The tools are:
//! - cli: Command line interface and options for the huff binary.
//! - freq_count: Frequency count of the input symbols, the first step of building a code.
//! - report: The dictionary, encoded bits and compression ratio printed by the binary.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
