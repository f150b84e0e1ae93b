//! Judge invocation request.
//!
//! The test harness drives the judge over stdin with a single JSON object
//! naming the directory of the test case under judgment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

/// Request read from stdin: `{ "test_dir": "<path>" }`.
#[derive(Debug, Deserialize)]
pub struct TestRequest {
    pub test_dir: PathBuf,
}

impl TestRequest {
    /// Parse a request from a reader (stdin in production).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .context("failed to read test request")?;
        serde_json::from_str(&raw).context("invalid test request JSON")
    }
}
