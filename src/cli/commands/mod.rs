//! CLI command handlers

pub mod check;
pub mod config;
pub mod gpa;
pub mod import;

use gradetrack::models::StudentRecord;
use std::path::Path;

/// Load a student transcript from a TOML file.
pub(crate) fn load_student(path: &Path) -> Result<StudentRecord, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("✗ Failed to read transcript {}: {e}", path.display()))?;
    toml::from_str(&contents)
        .map_err(|e| format!("✗ Failed to parse transcript {}: {e}", path.display()))
}
