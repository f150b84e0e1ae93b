//! Configuration module.
//!
//! This module defines the command-line interface (CLI) for the judge using `clap`.
//! The test harness normally supplies the test directory as a JSON request over
//! stdin; the positional argument exists for running the judge by hand.

use clap::Parser;
use std::path::PathBuf;

/// A verification oracle for selective linking of FLE executables.
///
/// Checks that a linked program contains the machine code of object files it
/// references and none of the code of object files it does not. Prints a
/// one-line JSON verdict on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Test-case directory (read from stdin as a JSON request when omitted)
    pub test_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,
}
