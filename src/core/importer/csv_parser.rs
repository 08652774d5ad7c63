//! Roster CSV parsing
//!
//! Rosters are simple exports: a header row naming the columns, then one row
//! per (student, course) pair. Column order varies between exports, so the
//! header drives the lookup; matching is case-insensitive.

use std::error::Error;
use std::fs;
use std::path::Path;

/// One raw roster row before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Student name as exported
    pub student_name: String,
    /// Student ID as exported
    pub student_id: String,
    /// Course name as exported (possibly abbreviated or misspelled)
    pub course: String,
    /// Raw score cell, normalized later
    pub raw_score: String,
}

const NAME_COLUMN: &str = "student name";
const ID_COLUMN: &str = "student id";
const COURSE_COLUMN: &str = "course";
const SCORE_COLUMN: &str = "score";

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn column_index(header: &[String], wanted: &str) -> Result<usize, Box<dyn Error>> {
    header
        .iter()
        .position(|cell| cell.to_lowercase() == wanted)
        .ok_or_else(|| format!("roster is missing a '{wanted}' column").into())
}

/// Parse a roster CSV file into raw rows.
///
/// Rows without a student name or ID are skipped (subtotal and footer rows
/// in real exports). A missing column in the header is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is empty, or lacks one of
/// the required columns.
pub fn parse_roster_csv(path: &Path) -> Result<Vec<RosterRow>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read roster {}: {e}", path.display()))?;
    parse_roster_str(&contents)
}

/// Parse roster CSV contents. See [`parse_roster_csv`].
///
/// # Errors
///
/// Returns an error when the contents are empty or a required column is
/// missing from the header.
pub fn parse_roster_str(contents: &str) -> Result<Vec<RosterRow>, Box<dyn Error>> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());
    let header = split_row(lines.next().ok_or("roster is empty")?);

    let name_idx = column_index(&header, NAME_COLUMN)?;
    let id_idx = column_index(&header, ID_COLUMN)?;
    let course_idx = column_index(&header, COURSE_COLUMN)?;
    let score_idx = column_index(&header, SCORE_COLUMN)?;

    let mut rows = Vec::new();
    for line in lines {
        let cells = split_row(line);
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        let row = RosterRow {
            student_name: cell(name_idx),
            student_id: cell(id_idx),
            course: cell(course_idx),
            raw_score: cell(score_idx),
        };
        if row.student_name.is_empty() || row.student_id.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}
