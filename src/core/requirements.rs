//! Graduation requirement tracking
//!
//! Requirement progress is a derived view: it is recomputed from the
//! transcript on demand and never stored. Each course satisfies at most one
//! category (first exact match in catalog order). Chinese Social Studies is
//! special-cased: it needs all three distinct courses rather than a raw
//! semester count.

use crate::core::models::catalog::{self, SubjectCategory};
use crate::core::models::StudentRecord;
use std::collections::{BTreeSet, HashMap};

/// Progress toward graduation, derived from a transcript.
#[derive(Debug, Clone, Default)]
pub struct RequirementProgress {
    counts: HashMap<SubjectCategory, u32>,
    social_studies_taken: BTreeSet<String>,
}

impl RequirementProgress {
    /// Tally requirement progress over every term of `student`.
    ///
    /// Only courses whose name matches a catalog entry exactly count;
    /// unresolved names contribute nothing.
    #[must_use]
    pub fn from_student(student: &StudentRecord) -> Self {
        let mut progress = Self::default();
        for (_, _, term) in student.terms() {
            for record in term.courses() {
                let Some(category) = catalog::category_for(&record.course) else {
                    continue;
                };
                *progress.counts.entry(category).or_insert(0) += 1;
                if category == SubjectCategory::ChineseSocialStudies {
                    progress.social_studies_taken.insert(record.course.clone());
                }
            }
        }
        progress
    }

    /// Qualifying semesters completed for `category`.
    #[must_use]
    pub fn completed(&self, category: SubjectCategory) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// The distinct Chinese Social Studies courses taken so far.
    #[must_use]
    pub const fn social_studies_taken(&self) -> &BTreeSet<String> {
        &self.social_studies_taken
    }
}

/// A single unmet graduation requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficiency {
    /// The category that is short
    pub category: SubjectCategory,
    /// Human-readable description of the shortfall
    pub detail: String,
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.detail)
    }
}

/// Check every graduation requirement against `student`'s transcript.
///
/// Returns one deficiency per unmet category, in catalog order. An empty
/// vector means the student meets all requirements.
#[must_use]
pub fn check_graduation(student: &StudentRecord) -> Vec<Deficiency> {
    let progress = RequirementProgress::from_student(student);
    let mut deficiencies = Vec::new();

    for category in SubjectCategory::ALL {
        let requirement = category.requirement();
        if category == SubjectCategory::ChineseSocialStudies {
            let missing: Vec<&str> = requirement
                .courses
                .iter()
                .copied()
                .filter(|course| !progress.social_studies_taken().contains(*course))
                .collect();
            if !missing.is_empty() {
                deficiencies.push(Deficiency {
                    category,
                    detail: format!("Missing required courses - {}", missing.join(", ")),
                });
            }
            continue;
        }

        let completed = progress.completed(category);
        if completed < requirement.semesters {
            deficiencies.push(Deficiency {
                category,
                detail: format!(
                    "Need {} semesters, only completed {completed}",
                    requirement.semesters
                ),
            });
        }
    }

    deficiencies
}
