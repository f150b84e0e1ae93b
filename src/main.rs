//! Entry point for the fle-judge test oracle.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Initialize `tracing` on stderr (stdout carries the verdict).
//! 3. Resolve the test directory from the CLI or from the stdin request.
//! 4. Run the verification and print the JSON verdict.
//!
//! Error handling is done via `anyhow`. Every failure is converted into a
//! verdict line rather than a crash, so the process terminates normally with
//! exactly one JSON object on stdout.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fle_judge::config::Config;
use fle_judge::judge::{self, Verdict};
use fle_judge::request::TestRequest;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let verdict = match run(config.test_dir) {
        Ok(verdict) => verdict,
        Err(err) => Verdict::fail(format!("Judge error: {err:#}")),
    };

    println!("{}", serde_json::to_string(&verdict)?);
    Ok(())
}

/// Resolve the test directory and judge it.
///
/// Anything that goes wrong here (unreadable stdin, malformed request)
/// surfaces as an error for the caller to fold into a judge-error verdict.
fn run(test_dir: Option<PathBuf>) -> Result<Verdict> {
    let test_dir = match test_dir {
        Some(dir) => dir,
        None => TestRequest::from_reader(io::stdin().lock())?.test_dir,
    };

    tracing::info!("judging {}", test_dir.display());
    Ok(judge::judge(&test_dir))
}
