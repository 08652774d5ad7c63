//! Course records and score normalization
//!
//! Raw roster exports carry scores in several shapes: integers, floats,
//! fractions in (0, 1), and percent strings like `"86.81%"`. `Score`
//! normalizes all of them to an integer percentage in 0..=100 at the
//! boundary so the rest of the crate never re-validates.

use super::catalog::SubjectCategory;
use super::scale::GradeScale;
use serde::{Deserialize, Serialize};

/// A normalized integer score in 0..=100.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Build a score, clamping values above 100.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// The normalized integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Normalize a numeric score.
    ///
    /// Fractions strictly between 0 and 1 are treated as proportions and
    /// rescaled to percentages. The result is rounded half-away-from-zero
    /// and clamped to 0..=100. Non-finite input normalizes to 0.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        let scaled = if value > 0.0 && value < 1.0 {
            value * 100.0
        } else {
            value
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(scaled.round().clamp(0.0, 100.0) as u8)
    }

    /// Parse a raw score string from a roster export.
    ///
    /// Accepts plain numbers (`"95"`, `"93.5"`), fractions (`"0.9333"`,
    /// rescaled to `93`), and percent strings (`"86.81%"`). Percent input
    /// is already a percentage, so no fraction rescale applies to it.
    /// Anything unparsable normalizes to 0; bad cells must not abort an
    /// import.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(percent) = trimmed.strip_suffix('%') {
            return percent.trim().parse::<f64>().map_or(Self(0), |value| {
                if value.is_finite() {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    Self(value.round().clamp(0.0, 100.0) as u8)
                } else {
                    Self(0)
                }
            });
        }
        trimmed.parse::<f64>().map_or(Self(0), Self::from_f64)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

const fn default_credits() -> u32 {
    1
}

/// A single completed course on a student's transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// The subject category the course counts toward
    pub subject: SubjectCategory,
    /// The course name (canonical when the importer could resolve it)
    pub course: String,
    /// Normalized score
    pub score: Score,
    /// Grading scale used for GPA conversion
    #[serde(default)]
    pub scale: GradeScale,
    /// Credit weight, defaults to 1
    #[serde(default = "default_credits")]
    pub credits: u32,
}

impl CourseRecord {
    /// Build a record with the default scale and a single credit.
    #[must_use]
    pub fn new(subject: SubjectCategory, course: impl Into<String>, score: Score) -> Self {
        Self {
            subject,
            course: course.into(),
            score,
            scale: GradeScale::default(),
            credits: default_credits(),
        }
    }

    /// Builder-style scale override.
    #[must_use]
    pub const fn with_scale(mut self, scale: GradeScale) -> Self {
        self.scale = scale;
        self
    }

    /// Builder-style credit override.
    #[must_use]
    pub const fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }
}
