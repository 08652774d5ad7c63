//! Data model: grading scales, the curriculum catalog, course records, and
//! student transcripts.

pub mod catalog;
pub mod course;
pub mod scale;
pub mod student;

pub use catalog::SubjectCategory;
pub use course::{CourseRecord, Score};
pub use scale::GradeScale;
pub use student::{Semester, StudentRecord, TermRecord, YearLevel, YearRecord};
