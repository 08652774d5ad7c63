//! Curriculum catalog: subject categories, graduation requirements, and the
//! canonical course-name lists
//!
//! The catalog is process-wide immutable configuration. Tables are `const`
//! data; lookups iterate in declaration order, which is the catalog's stable
//! iteration order (first-match policies depend on it).

use serde::{Deserialize, Serialize};

/// The closed set of subject categories in the curriculum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectCategory {
    /// Chinese language
    #[serde(rename = "Chinese")]
    Chinese,
    /// Chinese social studies (history, geography, politics)
    #[serde(rename = "Chinese_Social_Studies")]
    ChineseSocialStudies,
    /// English language and literature
    #[serde(rename = "English")]
    English,
    /// Mathematics
    #[serde(rename = "Mathematics")]
    Mathematics,
    /// Social sciences and world languages
    #[serde(rename = "Social_Science")]
    SocialScience,
    /// Natural sciences
    #[serde(rename = "Science")]
    Science,
    /// Technology (not counted toward GPA)
    #[serde(rename = "Technology")]
    Technology,
    /// Fine and performing arts (not counted toward GPA)
    #[serde(rename = "Fine_And_Performing_Arts")]
    FineAndPerformingArts,
    /// Physical education (not counted toward GPA)
    #[serde(rename = "Physical_Education")]
    PhysicalEducation,
    /// Electives
    #[serde(rename = "Electives")]
    Electives,
    /// Interdisciplinary seminar
    #[serde(rename = "Interdisciplinary_Seminar")]
    InterdisciplinarySeminar,
}

/// A category's graduation requirement: how many qualifying semesters are
/// needed and which course names qualify.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRequirement {
    /// Number of qualifying semesters required for graduation
    pub semesters: u32,
    /// Canonical course names belonging to this category
    pub courses: &'static [&'static str],
}

const CHINESE_COURSES: &[&str] = &["Chinese"];

const CHINESE_SOCIAL_STUDIES_COURSES: &[&str] =
    &["Chinese History", "Chinese Geography", "Chinese Politics"];

const ENGLISH_COURSES: &[&str] = &[
    "Pre-AP English",
    "Pre-AP English Honors",
    "AP Seminar 10",
    "English 11 Honors",
    "English 12 Literature Honors",
    "AP English Language and Composition",
    "AP English Literature",
];

const MATHEMATICS_COURSES: &[&str] = &[
    "Pre-Calculus",
    "AP Pre-Calculus",
    "AP Calculus AB",
    "AP Calculus BC",
    "AP Statistics",
    "Calculus III",
    "Differential Equations",
    "Probability Theory",
];

const SOCIAL_SCIENCE_COURSES: &[&str] = &[
    "Advanced Economics",
    "Developmental Psychology Seminar",
    "Political Science & Law",
    "AP Microeconomics",
    "AP Micro/Macroeconomics",
    "AP Psychology",
    "AP Environmental Science",
    "Intro to Psychology",
    "Sociology",
    "Spanish I",
    "Spanish II",
    "AP Spanish Language and Culture",
    "German I",
    "German II",
    "German III",
    "French I",
    "French II",
    "AP French",
    "Japanese I",
    "Japanese II",
    "Japanese III",
    "Korean",
    "Russian",
];

const SCIENCE_COURSES: &[&str] = &[
    "Biology",
    "Biology Honors",
    "AP Biology",
    "Neuropathology",
    "Marine Biology",
    "Chemistry Honors",
    "AP Chemistry",
    "Physics",
    "AP Physics C: Mechanics",
    "AP Physics C: E/M",
    "AP Physics 1",
    "AP Physics 2",
    "Advanced Physics",
];

const TECHNOLOGY_COURSES: &[&str] = &["Technology"];

const FINE_AND_PERFORMING_ARTS_COURSES: &[&str] = &[
    "AP 3-D Art and Design",
    "AP 2-D Art and Design",
    "AP Drawing",
    "Visual Arts",
    "Visual Arts II",
    "Photography",
    "AP Music Theory",
    "Instrumental Ensemble I (Y10 Introduction)",
    "Instrumental Ensemble I (CNCC Semester Introduction)",
    "Instrumental Ensemble II",
    "Vocal Ensemble I",
    "Vocal Ensemble II",
    "Guitar I",
    "Guitar II",
    "Dance",
    "Dance I",
    "Dance II",
    "Drama I",
    "Drama II",
    "Independent Video Production",
];

const PHYSICAL_EDUCATION_COURSES: &[&str] = &["PE"];

const ELECTIVES_COURSES: &[&str] = &[
    "AP Computer Science A",
    "AP Computer Science Principles",
    "Graphics Programming in Java",
    "AP Seminar",
    "AP Research",
    "Entrepreneurship",
    "Web-Development",
    "Speech and Debate",
];

const INTERDISCIPLINARY_SEMINAR_COURSES: &[&str] = &["Interdisciplinary Research Seminar"];

impl SubjectCategory {
    /// Every category, in catalog iteration order.
    pub const ALL: [Self; 11] = [
        Self::Chinese,
        Self::ChineseSocialStudies,
        Self::English,
        Self::Mathematics,
        Self::SocialScience,
        Self::Science,
        Self::Technology,
        Self::FineAndPerformingArts,
        Self::PhysicalEducation,
        Self::Electives,
        Self::InterdisciplinarySeminar,
    ];

    /// Categories whose courses never contribute to GPA.
    pub const GPA_EXCLUDED: [Self; 3] = [
        Self::Technology,
        Self::PhysicalEducation,
        Self::FineAndPerformingArts,
    ];

    /// The underscore-separated key used in serialized transcripts and term keys.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chinese => "Chinese",
            Self::ChineseSocialStudies => "Chinese_Social_Studies",
            Self::English => "English",
            Self::Mathematics => "Mathematics",
            Self::SocialScience => "Social_Science",
            Self::Science => "Science",
            Self::Technology => "Technology",
            Self::FineAndPerformingArts => "Fine_And_Performing_Arts",
            Self::PhysicalEducation => "Physical_Education",
            Self::Electives => "Electives",
            Self::InterdisciplinarySeminar => "Interdisciplinary_Seminar",
        }
    }

    /// The human-readable category name (key with spaces).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chinese => "Chinese",
            Self::ChineseSocialStudies => "Chinese Social Studies",
            Self::English => "English",
            Self::Mathematics => "Mathematics",
            Self::SocialScience => "Social Science",
            Self::Science => "Science",
            Self::Technology => "Technology",
            Self::FineAndPerformingArts => "Fine And Performing Arts",
            Self::PhysicalEducation => "Physical Education",
            Self::Electives => "Electives",
            Self::InterdisciplinarySeminar => "Interdisciplinary Seminar",
        }
    }

    /// The graduation requirement for this category.
    #[must_use]
    pub const fn requirement(self) -> CategoryRequirement {
        match self {
            Self::Chinese => CategoryRequirement { semesters: 6, courses: CHINESE_COURSES },
            Self::ChineseSocialStudies => CategoryRequirement {
                semesters: 3,
                courses: CHINESE_SOCIAL_STUDIES_COURSES,
            },
            Self::English => CategoryRequirement { semesters: 6, courses: ENGLISH_COURSES },
            Self::Mathematics => CategoryRequirement { semesters: 6, courses: MATHEMATICS_COURSES },
            Self::SocialScience => CategoryRequirement {
                semesters: 4,
                courses: SOCIAL_SCIENCE_COURSES,
            },
            Self::Science => CategoryRequirement { semesters: 6, courses: SCIENCE_COURSES },
            Self::Technology => CategoryRequirement { semesters: 2, courses: TECHNOLOGY_COURSES },
            Self::FineAndPerformingArts => CategoryRequirement {
                semesters: 2,
                courses: FINE_AND_PERFORMING_ARTS_COURSES,
            },
            Self::PhysicalEducation => CategoryRequirement {
                semesters: 6,
                courses: PHYSICAL_EDUCATION_COURSES,
            },
            Self::Electives => CategoryRequirement { semesters: 6, courses: ELECTIVES_COURSES },
            Self::InterdisciplinarySeminar => CategoryRequirement {
                semesters: 1,
                courses: INTERDISCIPLINARY_SEMINAR_COURSES,
            },
        }
    }

    /// Whether courses in this category are excluded from GPA computation.
    #[must_use]
    pub const fn is_gpa_excluded(self) -> bool {
        matches!(
            self,
            Self::Technology | Self::PhysicalEducation | Self::FineAndPerformingArts
        )
    }
}

impl std::fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Find the first catalog category whose canonical list contains
/// `course_name` (exact match, catalog iteration order).
///
/// A course can satisfy at most one category; if two categories ever shared a
/// name, the first in catalog order would win.
#[must_use]
pub fn category_for(course_name: &str) -> Option<SubjectCategory> {
    SubjectCategory::ALL
        .into_iter()
        .find(|category| category.requirement().courses.contains(&course_name))
}

/// Whether `course_name` appears verbatim in any GPA-excluded category's
/// canonical list.
#[must_use]
pub fn is_gpa_excluded_name(course_name: &str) -> bool {
    SubjectCategory::GPA_EXCLUDED
        .into_iter()
        .any(|category| category.requirement().courses.contains(&course_name))
}

/// All canonical course names across every category, deduplicated, in
/// catalog iteration order.
#[must_use]
pub fn all_canonical_names() -> Vec<&'static str> {
    let mut names = Vec::new();
    for category in SubjectCategory::ALL {
        for name in category.requirement().courses {
            if !names.contains(name) {
                names.push(*name);
            }
        }
    }
    names
}
