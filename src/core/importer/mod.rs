//! Roster import: raw rows to transcripts, with fuzzy name resolution
//!
//! Importing a roster groups its rows by student, normalizes scores,
//! resolves course names against the catalog, and files each course into
//! the target (year, semester) term. Every resolution decision is recorded
//! so the operator can audit what was substituted and what was left alone.

pub mod csv_parser;

pub use csv_parser::{parse_roster_csv, parse_roster_str, RosterRow};

use crate::core::models::catalog::{self, SubjectCategory};
use crate::core::models::{CourseRecord, Score, Semester, StudentRecord, YearLevel};
use crate::core::resolver::{self, MatchMethod, Resolution};

/// How one roster course name was handled during import.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    /// The student the row belongs to
    pub student: String,
    /// The course name as it appeared in the roster
    pub original_course: String,
    /// The canonical name it resolved to, when a best candidate existed
    pub matched_course: Option<String>,
    /// The candidate's score (0.0 when no candidate scored)
    pub similarity: f64,
    /// How the candidate was scored
    pub method: Option<MatchMethod>,
    /// Words the input shared with the candidate
    pub shared_tokens: Vec<String>,
    /// Whether the canonical name replaced the original on the transcript
    pub substituted: bool,
}

/// The outcome of importing a roster.
#[derive(Debug, Default)]
pub struct ImportResult {
    /// One transcript per student, in roster order of first appearance
    pub students: Vec<StudentRecord>,
    /// Resolution audit trail for non-exact course names
    pub matches: Vec<MatchRecord>,
}

/// Convert raw roster rows into transcripts for `(year, semester)`.
///
/// Course names already in the catalog are filed as-is. Everything else
/// goes through fuzzy resolution: accepted matches substitute the canonical
/// name, rejected matches keep the original spelling. Either way the course
/// is imported; a typo loses requirement credit but never loses the grade.
/// Courses that resolve to no category are filed under Electives.
#[must_use]
pub fn import_rows(
    rows: &[RosterRow],
    year: YearLevel,
    semester: Semester,
    threshold: f64,
) -> ImportResult {
    let canonical = catalog::all_canonical_names();
    let mut result = ImportResult::default();

    for row in rows {
        let student_idx = match result
            .students
            .iter()
            .position(|s| s.student_id == row.student_id)
        {
            Some(idx) => idx,
            None => {
                result
                    .students
                    .push(StudentRecord::new(row.student_name.clone(), row.student_id.clone()));
                result.students.len() - 1
            }
        };

        let course_name = if catalog::category_for(&row.course).is_some() {
            row.course.clone()
        } else {
            match resolver::find_best_match(&row.course, &canonical, threshold) {
                Resolution::Accepted(candidate) => {
                    let name = candidate.name.clone();
                    result.matches.push(MatchRecord {
                        student: row.student_name.clone(),
                        original_course: row.course.clone(),
                        matched_course: Some(candidate.name),
                        similarity: candidate.score,
                        method: Some(candidate.method),
                        shared_tokens: candidate.shared_tokens,
                        substituted: true,
                    });
                    name
                }
                Resolution::Rejected(candidate) => {
                    result.matches.push(MatchRecord {
                        student: row.student_name.clone(),
                        original_course: row.course.clone(),
                        matched_course: Some(candidate.name),
                        similarity: candidate.score,
                        method: Some(candidate.method),
                        shared_tokens: candidate.shared_tokens,
                        substituted: false,
                    });
                    row.course.clone()
                }
                Resolution::NoCandidates => {
                    result.matches.push(MatchRecord {
                        student: row.student_name.clone(),
                        original_course: row.course.clone(),
                        matched_course: None,
                        similarity: 0.0,
                        method: None,
                        shared_tokens: Vec::new(),
                        substituted: false,
                    });
                    row.course.clone()
                }
            }
        };

        let subject = catalog::category_for(&course_name).unwrap_or(SubjectCategory::Electives);
        let record = CourseRecord::new(subject, course_name, Score::parse(&row.raw_score));
        result.students[student_idx]
            .year_mut(year)
            .term_mut(semester)
            .add_course(record);
    }

    result
}

/// Replace filesystem-hostile characters in a name with underscores.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

/// The transcript filename for a student imported into `(year, semester)`.
#[must_use]
pub fn transcript_filename(student: &StudentRecord, year: YearLevel, semester: Semester) -> String {
    format!(
        "{}_{}_G{}{}.toml",
        sanitize_filename(&student.name),
        sanitize_filename(&student.student_id),
        year.label(),
        semester.label()
    )
}
