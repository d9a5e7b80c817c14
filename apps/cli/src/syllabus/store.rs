//! Local persistence — one JSON document at a fixed path, overwritten on
//! each explicit save. No versioning, no migration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::syllabus::record::SyllabusRecord;

/// Writes the active record, replacing any previous save.
pub fn save(path: &Path, record: &SyllabusRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize syllabus")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads the saved record, if any. A missing file is `Ok(None)`; a file that
/// exists but does not deserialize is an error.
pub fn load(path: &Path) -> Result<Option<SyllabusRecord>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let record = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid syllabus data in {}", path.display()))?;
    Ok(Some(record))
}
