//! Student transcript records: terms, years, and identity fields
//!
//! A transcript is three years of two semesters each. Courses within a term
//! are keyed `<Subject_Key>_<n>` where `n` disambiguates multiple courses in
//! the same category, matching the on-disk TOML layout.

use super::course::CourseRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the two semesters in an academic year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Fall semester
    Fall,
    /// Spring semester
    Spring,
}

impl Semester {
    /// Both semesters in chronological order.
    pub const ALL: [Self; 2] = [Self::Fall, Self::Spring];

    /// The semester name as used in filenames and display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A high-school year level (grades 10 through 12).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearLevel {
    /// Grade 10
    #[serde(rename = "10")]
    Grade10,
    /// Grade 11
    #[serde(rename = "11")]
    Grade11,
    /// Grade 12
    #[serde(rename = "12")]
    Grade12,
}

impl YearLevel {
    /// All year levels in chronological order.
    pub const ALL: [Self; 3] = [Self::Grade10, Self::Grade11, Self::Grade12];

    /// The numeric grade label ("10", "11", "12").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grade10 => "10",
            Self::Grade11 => "11",
            Self::Grade12 => "12",
        }
    }
}

impl std::fmt::Display for YearLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grade {}", self.label())
    }
}

/// The courses taken in a single semester, keyed by `<Subject_Key>_<n>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermRecord {
    courses: HashMap<String, CourseRecord>,
}

impl TermRecord {
    /// Insert a course, generating the next free `<Subject_Key>_<n>` key for
    /// its category. Returns the key used.
    pub fn add_course(&mut self, record: CourseRecord) -> String {
        let mut n = self
            .courses
            .values()
            .filter(|existing| existing.subject == record.subject)
            .count()
            + 1;
        let key = loop {
            let candidate = format!("{}_{n}", record.subject.key());
            if !self.courses.contains_key(&candidate) {
                break candidate;
            }
            n += 1;
        };
        self.courses.insert(key.clone(), record);
        key
    }

    /// Remove a course by its term key.
    pub fn remove_course(&mut self, key: &str) -> Option<CourseRecord> {
        self.courses.remove(key)
    }

    /// Look up a course by its term key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CourseRecord> {
        self.courses.get(key)
    }

    /// Iterate over the term's course records (order unspecified).
    pub fn courses(&self) -> impl Iterator<Item = &CourseRecord> {
        self.courses.values()
    }

    /// Iterate over (key, record) pairs (order unspecified).
    pub fn entries(&self) -> impl Iterator<Item = (&String, &CourseRecord)> {
        self.courses.iter()
    }

    /// Number of courses recorded this term.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the term has no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Both semesters of an academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Fall semester courses
    #[serde(default)]
    pub fall: TermRecord,
    /// Spring semester courses
    #[serde(default)]
    pub spring: TermRecord,
}

impl YearRecord {
    /// The term record for `semester`.
    #[must_use]
    pub const fn term(&self, semester: Semester) -> &TermRecord {
        match semester {
            Semester::Fall => &self.fall,
            Semester::Spring => &self.spring,
        }
    }

    /// Mutable access to the term record for `semester`.
    pub fn term_mut(&mut self, semester: Semester) -> &mut TermRecord {
        match semester {
            Semester::Fall => &mut self.fall,
            Semester::Spring => &mut self.spring,
        }
    }
}

/// A student's full transcript with identity fields.
///
/// Identity fields beyond name and ID are free-form strings; they pass
/// through serialization untouched and default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Full name in English
    pub name: String,
    /// School-assigned student ID
    pub student_id: String,
    /// Name in Chinese
    #[serde(default)]
    pub chinese_name: String,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: String,
    /// Gender
    #[serde(default)]
    pub gender: String,
    /// Enrolled curriculum program
    #[serde(default)]
    pub curriculum_program: String,
    /// Enrollment date
    #[serde(default)]
    pub date_enrolled: String,
    /// Expected or actual graduation date
    #[serde(default)]
    pub date_graduation: String,
    /// Grade 10 courses
    #[serde(default)]
    pub grade10: YearRecord,
    /// Grade 11 courses
    #[serde(default)]
    pub grade11: YearRecord,
    /// Grade 12 courses
    #[serde(default)]
    pub grade12: YearRecord,
}

impl StudentRecord {
    /// Create an empty transcript for a student.
    #[must_use]
    pub fn new(name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            ..Self::default()
        }
    }

    /// The year record for `year`.
    #[must_use]
    pub const fn year(&self, year: YearLevel) -> &YearRecord {
        match year {
            YearLevel::Grade10 => &self.grade10,
            YearLevel::Grade11 => &self.grade11,
            YearLevel::Grade12 => &self.grade12,
        }
    }

    /// Mutable access to the year record for `year`.
    pub fn year_mut(&mut self, year: YearLevel) -> &mut YearRecord {
        match year {
            YearLevel::Grade10 => &mut self.grade10,
            YearLevel::Grade11 => &mut self.grade11,
            YearLevel::Grade12 => &mut self.grade12,
        }
    }

    /// The term record for `(year, semester)`.
    #[must_use]
    pub const fn term(&self, year: YearLevel, semester: Semester) -> &TermRecord {
        self.year(year).term(semester)
    }

    /// Iterate over all six terms in chronological order.
    pub fn terms(&self) -> impl Iterator<Item = (YearLevel, Semester, &TermRecord)> {
        YearLevel::ALL.into_iter().flat_map(move |year| {
            Semester::ALL
                .into_iter()
                .map(move |semester| (year, semester, self.term(year, semester)))
        })
    }

    /// Total number of courses across the whole transcript.
    #[must_use]
    pub fn course_total(&self) -> usize {
        self.terms().map(|(_, _, term)| term.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::catalog::SubjectCategory;
    use crate::core::models::course::Score;

    fn course(subject: SubjectCategory, name: &str, score: u8) -> CourseRecord {
        CourseRecord::new(subject, name, Score::new(score))
    }

    #[test]
    fn term_keys_number_within_category() {
        let mut term = TermRecord::default();
        let k1 = term.add_course(course(SubjectCategory::Science, "Biology", 90));
        let k2 = term.add_course(course(SubjectCategory::Science, "Physics", 85));
        let k3 = term.add_course(course(SubjectCategory::English, "Pre-AP English", 88));
        assert_eq!(k1, "Science_1");
        assert_eq!(k2, "Science_2");
        assert_eq!(k3, "English_1");
        assert_eq!(term.len(), 3);
    }

    #[test]
    fn term_keys_skip_occupied_slots_after_removal() {
        let mut term = TermRecord::default();
        let k1 = term.add_course(course(SubjectCategory::Science, "Biology", 90));
        let _k2 = term.add_course(course(SubjectCategory::Science, "Physics", 85));
        term.remove_course(&k1);
        // One science course remains, so numbering restarts at 2; slot 2 is
        // taken, so the next free slot is used.
        let k3 = term.add_course(course(SubjectCategory::Science, "AP Chemistry", 91));
        assert_eq!(k3, "Science_3");
        assert!(term.get("Science_1").is_none());
    }

    #[test]
    fn terms_iterate_in_chronological_order() {
        let mut student = StudentRecord::new("Test Student", "S001");
        student
            .year_mut(YearLevel::Grade11)
            .term_mut(Semester::Spring)
            .add_course(course(SubjectCategory::Mathematics, "Pre-Calculus", 95));

        let order: Vec<(YearLevel, Semester)> = student
            .terms()
            .map(|(year, semester, _)| (year, semester))
            .collect();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], (YearLevel::Grade10, Semester::Fall));
        assert_eq!(order[3], (YearLevel::Grade11, Semester::Spring));
        assert_eq!(order[5], (YearLevel::Grade12, Semester::Spring));
        assert_eq!(student.course_total(), 1);
    }

    #[test]
    fn transcript_toml_round_trip() {
        let mut student = StudentRecord::new("Round Trip", "S002");
        student.chinese_name = "测试".to_string();
        student
            .year_mut(YearLevel::Grade10)
            .term_mut(Semester::Fall)
            .add_course(course(SubjectCategory::Science, "Biology Honors", 93));

        let serialized = toml::to_string(&student).expect("serialize transcript");
        let parsed: StudentRecord = toml::from_str(&serialized).expect("parse transcript");
        assert_eq!(parsed, student);
        assert_eq!(
            parsed
                .term(YearLevel::Grade10, Semester::Fall)
                .get("Science_1")
                .map(|record| record.course.as_str()),
            Some("Biology Honors")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let minimal = r#"
name = "Minimal"
student_id = "S003"
"#;
        let parsed: StudentRecord = toml::from_str(minimal).expect("parse minimal transcript");
        assert_eq!(parsed.course_total(), 0);
        assert!(parsed.chinese_name.is_empty());
    }
}
