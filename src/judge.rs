//! Selective-linking verification.
//!
//! The linker under test must include the code of object files the program
//! references and drop the code of object files it does not. The judge checks
//! this from the outside: the executable's `.text` bytes must contain the
//! used object's code and must not contain the unused object's code.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::fle::FleObject;

/// The common `push rbp; mov rbp, rsp` prologue. Nearly every function
/// starts with it, so it carries no discriminating value in a byte search.
const FUNCTION_PROLOGUE: [u8; 4] = [0x55, 0x48, 0x89, 0xe5];

/// Chunks shorter than this after prologue stripping are too common to serve
/// as a fingerprint (e.g. a lone `ret`) and are ignored.
const MIN_CHUNK_LEN: usize = 2;

/// Final result of a judge run, printed as one JSON line on stdout.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub success: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Judge the build directory under `test_dir`.
///
/// Every failure mode is folded into a [`Verdict`]; the checks run in a fixed
/// order and the first failing one wins:
/// 1. Any of the three FLE files fails to load.
/// 2. The used object's code is missing from the program.
/// 3. The unused object's code is present in the program.
pub fn judge(test_dir: &Path) -> Verdict {
    let build_dir = test_dir.join("build");

    let (program, unused, used) = match load_fle_files(&build_dir) {
        Ok(files) => files,
        Err(err) => return Verdict::fail(format!("Failed to load FLE files: {err:#}")),
    };

    // The executable has its relocations applied, so its code lines are
    // continuous; concatenating the chunks reconstructs the full text blob
    // even if label lines survived in the output.
    let program_bin = program.text_chunks().concat();
    let used_chunks = used.text_chunks();
    let unused_chunks = unused.text_chunks();

    tracing::debug!(
        "program: {} text bytes, used: {} chunks, unused: {} chunks",
        program_bin.len(),
        used_chunks.len(),
        unused_chunks.len()
    );

    if !is_present(&used_chunks, &program_bin) {
        return Verdict::fail("Verification Failed: 'used.o' code not detected in program!");
    }

    if is_present(&unused_chunks, &program_bin) {
        return Verdict::fail("Verification Failed: 'unused.o' code WAS detected in program!");
    }

    Verdict::pass("Selective linking verified.")
}

/// Load the three required FLE documents; the first failure aborts the group.
fn load_fle_files(build_dir: &Path) -> Result<(FleObject, FleObject, FleObject)> {
    let program = FleObject::load(&build_dir.join("program"))?;
    let unused = FleObject::load(&build_dir.join("unused.fo"))?;
    let used = FleObject::load(&build_dir.join("used.fo"))?;
    Ok((program, unused, used))
}

/// Check whether any candidate chunk occurs in the container blob.
///
/// A common function prologue at the start of a chunk is stripped before
/// comparison, and chunks left shorter than [`MIN_CHUNK_LEN`] are skipped as
/// too risky for false positives. Zero eligible chunks counts as not present.
fn is_present(chunks: &[Vec<u8>], container: &[u8]) -> bool {
    chunks.iter().any(|chunk| {
        let body = chunk.strip_prefix(&FUNCTION_PROLOGUE).unwrap_or(chunk);
        if body.len() < MIN_CHUNK_LEN {
            return false;
        }
        container.windows(body.len()).any(|window| window == body)
    })
}
