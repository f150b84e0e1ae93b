//! Text-section chunk extraction.
//!
//! FLE sections are lists of annotated lines. Machine-code lines carry the
//! `🔢:` marker followed by space-separated hex byte pairs; anything else
//! (a label, a relocation placeholder, a comment) interrupts the byte stream
//! as seen in the file. Consecutive code lines therefore accumulate into one
//! chunk, sealed at every non-code line and at section end.

use std::mem;

/// Marker prefix of a machine-code line.
pub const HEX_MARKER: &str = "🔢:";

/// Decode the byte chunks of one section.
///
/// Chunk boundaries are determined solely by line classification: a line
/// either starts with [`HEX_MARKER`] or it terminates the current chunk.
/// A marked line whose payload fails to hex-decode contributes no bytes but
/// is still a code line, so it does not seal the chunk in progress.
pub fn section_chunks<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for line in lines {
        let line = line.trim();
        if let Some(payload) = line.strip_prefix(HEX_MARKER) {
            // Format: "🔢: 55 48 ..."
            let hex_str = payload.trim().replace(' ', "");
            match hex::decode(&hex_str) {
                Ok(bytes) => current.extend_from_slice(&bytes),
                Err(err) => {
                    tracing::debug!("skipping undecodable code line {:?}: {}", line, err);
                }
            }
        } else if !current.is_empty() {
            chunks.push(mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
