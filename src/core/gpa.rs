//! GPA computation over transcript scopes
//!
//! GPA is the credit-weighted mean of grade points over the courses in a
//! scope, after dropping every excluded course. A course is excluded when
//! its scale is `Not Included`, when its subject category is GPA-excluded,
//! or when its name appears in an excluded category's canonical list (so a
//! PE course misfiled under Electives still stays out of the GPA).

use crate::core::models::catalog;
use crate::core::models::{CourseRecord, GradeScale, Semester, StudentRecord, YearLevel};

/// Which slice of the transcript a GPA computation covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GpaScope {
    /// Every course across all three years
    All,
    /// Both semesters of one year
    Year(YearLevel),
    /// A single semester
    Term(YearLevel, Semester),
}

/// Whether `record` is excluded from GPA computation.
///
/// Checks both the subject category and the canonical name lists, so the
/// exclusion holds regardless of how the course was categorized.
#[must_use]
pub fn is_gpa_excluded(record: &CourseRecord) -> bool {
    record.subject.is_gpa_excluded() || catalog::is_gpa_excluded_name(&record.course)
}

fn scoped_courses<'a>(
    student: &'a StudentRecord,
    scope: GpaScope,
) -> impl Iterator<Item = &'a CourseRecord> {
    student
        .terms()
        .filter(move |(year, semester, _)| match scope {
            GpaScope::All => true,
            GpaScope::Year(target) => *year == target,
            GpaScope::Term(target_year, target_semester) => {
                *year == target_year && *semester == target_semester
            }
        })
        .flat_map(|(_, _, term)| term.courses())
}

/// Compute the GPA for `scope`, or 0.0 when no course contributes.
#[must_use]
pub fn compute_gpa(student: &StudentRecord, scope: GpaScope) -> f64 {
    let mut weighted_points = 0.0;
    let mut total_credits = 0.0;
    for record in scoped_courses(student, scope) {
        if record.scale == GradeScale::NotIncluded || is_gpa_excluded(record) {
            continue;
        }
        if let Some(points) = record.scale.points_for(record.score) {
            weighted_points += points * f64::from(record.credits);
            total_credits += f64::from(record.credits);
        }
    }
    if total_credits > 0.0 {
        weighted_points / total_credits
    } else {
        0.0
    }
}

/// Number of courses recorded in `scope`, counting excluded courses too.
#[must_use]
pub fn course_count(student: &StudentRecord, scope: GpaScope) -> usize {
    scoped_courses(student, scope).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Score, SubjectCategory};

    fn student_with(courses: &[(YearLevel, Semester, CourseRecord)]) -> StudentRecord {
        let mut student = StudentRecord::new("GPA Test", "S100");
        for (year, semester, record) in courses {
            student
                .year_mut(*year)
                .term_mut(*semester)
                .add_course(record.clone());
        }
        student
    }

    fn record(subject: SubjectCategory, name: &str, score: u8) -> CourseRecord {
        CourseRecord::new(subject, name, Score::new(score))
    }

    #[test]
    fn empty_transcript_has_zero_gpa() {
        let student = StudentRecord::new("Empty", "S101");
        assert!((compute_gpa(&student, GpaScope::All) - 0.0).abs() < f64::EPSILON);
        assert_eq!(course_count(&student, GpaScope::All), 0);
    }

    #[test]
    fn single_course_gpa_matches_its_band() {
        let student = student_with(&[(
            YearLevel::Grade10,
            Semester::Fall,
            record(SubjectCategory::Science, "Biology", 92),
        )]);
        let gpa = compute_gpa(&student, GpaScope::All);
        assert!((gpa - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn excluded_categories_do_not_count() {
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Biology", 92),
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::PhysicalEducation, "PE", 100),
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Technology, "Technology", 100),
            ),
        ]);
        // PE and Technology would raise the GPA to 4.2 if counted
        let gpa = compute_gpa(&student, GpaScope::All);
        assert!((gpa - 4.0).abs() < f64::EPSILON);
        // But they still count as recorded courses
        assert_eq!(course_count(&student, GpaScope::All), 3);
    }

    #[test]
    fn excluded_name_overrides_miscategorization() {
        // PE filed under Electives is still excluded
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Biology", 70),
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Electives, "PE", 100),
            ),
        ]);
        let gpa = compute_gpa(&student, GpaScope::All);
        assert!((gpa - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn not_included_scale_is_skipped() {
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Biology", 92),
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Marine Biology", 50)
                    .with_scale(GradeScale::NotIncluded),
            ),
        ]);
        let gpa = compute_gpa(&student, GpaScope::All);
        assert!((gpa - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_courses_excluded_gives_zero() {
        let student = student_with(&[(
            YearLevel::Grade10,
            Semester::Fall,
            record(SubjectCategory::PhysicalEducation, "PE", 95),
        )]);
        assert!((compute_gpa(&student, GpaScope::All) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn credit_weighting_shifts_the_mean() {
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Biology", 92), // 4.0, 1 credit
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Mathematics, "Pre-Calculus", 75).with_credits(3), // 3.0
            ),
        ]);
        let gpa = compute_gpa(&student, GpaScope::All);
        let expected = (4.0 + 3.0 * 3.0) / 4.0;
        assert!((gpa - expected).abs() < 1e-9);
    }

    #[test]
    fn scales_apply_per_course() {
        // 85 is 3.5 under AP but 4.0 under CNCC
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Physics", 85),
            ),
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Chinese, "Chinese", 85).with_scale(GradeScale::Cncc),
            ),
        ]);
        let gpa = compute_gpa(&student, GpaScope::All);
        assert!((gpa - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn scopes_select_the_right_terms() {
        let student = student_with(&[
            (
                YearLevel::Grade10,
                Semester::Fall,
                record(SubjectCategory::Science, "Biology", 92), // 4.0
            ),
            (
                YearLevel::Grade10,
                Semester::Spring,
                record(SubjectCategory::Science, "Physics", 75), // 3.0
            ),
            (
                YearLevel::Grade11,
                Semester::Fall,
                record(SubjectCategory::Mathematics, "AP Calculus AB", 98), // 4.3
            ),
        ]);

        let term = compute_gpa(
            &student,
            GpaScope::Term(YearLevel::Grade10, Semester::Fall),
        );
        assert!((term - 4.0).abs() < f64::EPSILON);

        let year = compute_gpa(&student, GpaScope::Year(YearLevel::Grade10));
        assert!((year - 3.5).abs() < f64::EPSILON);

        let all = compute_gpa(&student, GpaScope::All);
        assert!((all - (4.0 + 3.0 + 4.3) / 3.0).abs() < 1e-9);

        assert_eq!(course_count(&student, GpaScope::Year(YearLevel::Grade10)), 2);
        assert_eq!(
            course_count(&student, GpaScope::Term(YearLevel::Grade11, Semester::Spring)),
            0
        );
    }
}
