//! Grading scales and score-to-points conversion bands

use super::course::Score;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The grading scale assigned to a course.
///
/// `NotIncluded` marks a course that is excluded from GPA math entirely,
/// regardless of its subject.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GradeScale {
    /// AP (Advanced Placement) grading scale
    #[default]
    Ap,
    /// CNCC (Chinese national curriculum) grading scale
    Cncc,
    /// Excluded from GPA computation
    NotIncluded,
}

/// A contiguous score band mapping `low..=high` to a grade-point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Inclusive lower score bound
    pub low: u8,
    /// Inclusive upper score bound
    pub high: u8,
    /// Grade points awarded for scores in this band
    pub points: f64,
}

/// AP conversion bands: A+ 4.3, A 4.0, B 3.5, C 3.0, D 2.0, F 0.0
const AP_BANDS: &[GradeBand] = &[
    GradeBand { low: 97, high: 100, points: 4.3 },
    GradeBand { low: 90, high: 96, points: 4.0 },
    GradeBand { low: 80, high: 89, points: 3.5 },
    GradeBand { low: 70, high: 79, points: 3.0 },
    GradeBand { low: 60, high: 69, points: 2.0 },
    GradeBand { low: 0, high: 59, points: 0.0 },
];

/// CNCC conversion bands: A+ 4.3, A 4.0, B 3.0, C 2.0, F 0.0
const CNCC_BANDS: &[GradeBand] = &[
    GradeBand { low: 97, high: 100, points: 4.3 },
    GradeBand { low: 85, high: 96, points: 4.0 },
    GradeBand { low: 70, high: 84, points: 3.0 },
    GradeBand { low: 60, high: 69, points: 2.0 },
    GradeBand { low: 0, high: 59, points: 0.0 },
];

impl GradeScale {
    /// Every scale, in display order.
    pub const ALL: [Self; 3] = [Self::Ap, Self::Cncc, Self::NotIncluded];

    /// The user-facing label, also used in serialized transcripts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ap => "AP",
            Self::Cncc => "CNCC",
            Self::NotIncluded => "Not Included",
        }
    }

    /// Parse a scale label. Unrecognized labels fall back to `Ap`; an
    /// unknown scale on a course is a fallback default, not an error.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "cncc" => Self::Cncc,
            "not included" | "not_included" | "none" => Self::NotIncluded,
            _ => Self::Ap,
        }
    }

    /// The conversion bands for this scale, or `None` for `NotIncluded`.
    ///
    /// For `Ap` and `Cncc` the bands are ordered, non-overlapping, and
    /// partition 0..=100 exactly.
    #[must_use]
    pub const fn bands(self) -> Option<&'static [GradeBand]> {
        match self {
            Self::Ap => Some(AP_BANDS),
            Self::Cncc => Some(CNCC_BANDS),
            Self::NotIncluded => None,
        }
    }

    /// Look up the grade points for `score` under this scale.
    ///
    /// Returns `None` for `NotIncluded` (the course does not participate in
    /// GPA math at all).
    ///
    /// # Panics
    ///
    /// Panics if no band contains `score`. The bands partition 0..=100 and
    /// `Score` guarantees its value is in that range, so a miss is a
    /// data-model invariant violation, not a runtime case.
    #[must_use]
    pub fn points_for(self, score: Score) -> Option<f64> {
        let bands = self.bands()?;
        let value = score.value();
        Some(
            bands
                .iter()
                .find(|band| band.low <= value && value <= band.high)
                .unwrap_or_else(|| unreachable!("grade bands partition 0..=100"))
                .points,
        )
    }
}

impl std::fmt::Display for GradeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for GradeScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GradeScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}
