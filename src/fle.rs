//! FLE JSON document access.
//!
//! FLE objects and executables are JSON documents. Two shapes exist in the
//! wild: the current one keeps section lines under `sections["<name>"]["data"]`,
//! while an older one keeps them directly under a top-level `"<name>"` key.
//! Lookup tries both, newest first. Only the `.text` section is consumed here.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::extract;

/// Section holding machine code.
pub const TEXT_SECTION: &str = ".text";

/// A parsed FLE document (object file or executable).
pub struct FleObject {
    root: Value,
}

impl FleObject {
    /// Read and parse an FLE document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let root = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {} as FLE JSON", path.display()))?;
        Ok(Self { root })
    }

    /// Locate a section's lines by name.
    ///
    /// Tries `sections[name]["data"]` first, then the legacy top-level `name`
    /// key. Returns `None` when neither shape carries the section as a list.
    pub fn section_lines(&self, name: &str) -> Option<&[Value]> {
        if let Some(lines) = self
            .root
            .get("sections")
            .and_then(|sections| sections.get(name))
            .and_then(|section| section.get("data"))
            .and_then(Value::as_array)
        {
            return Some(lines.as_slice());
        }
        self.root
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Extract the byte chunks of the `.text` section.
    ///
    /// A document without a `.text` section yields no chunks; that is not an
    /// error here. The caller decides what an empty object means.
    pub fn text_chunks(&self) -> Vec<Vec<u8>> {
        let lines = self.section_lines(TEXT_SECTION).unwrap_or(&[]);
        // Non-string entries classify as non-code lines in the extractor.
        extract::section_chunks(lines.iter().map(|line| line.as_str().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(root: Value) -> FleObject {
        FleObject { root }
    }

    #[test]
    fn finds_lines_in_the_sections_map() {
        let obj = object(json!({
            "type": ".obj",
            "sections": { ".text": { "data": ["🔢: c3 90"] } }
        }));
        assert_eq!(obj.section_lines(TEXT_SECTION).unwrap().len(), 1);
        assert_eq!(obj.text_chunks(), vec![vec![0xc3, 0x90]]);
    }

    #[test]
    fn falls_back_to_the_legacy_top_level_key() {
        let obj = object(json!({ ".text": ["🔢: 90 90 90"] }));
        assert_eq!(obj.text_chunks(), vec![vec![0x90, 0x90, 0x90]]);
    }

    #[test]
    fn missing_text_section_yields_no_chunks() {
        let obj = object(json!({ "sections": { ".data": { "data": ["🔢: 00"] } } }));
        assert!(obj.section_lines(TEXT_SECTION).is_none());
        assert!(obj.text_chunks().is_empty());
    }

    #[test]
    fn non_string_lines_act_as_chunk_breaks() {
        let obj = object(json!({ ".text": ["🔢: c3 90", 42, "🔢: c3 90"] }));
        assert_eq!(obj.text_chunks(), vec![vec![0xc3, 0x90], vec![0xc3, 0x90]]);
    }
}
