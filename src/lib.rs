//! Shared library for `GradeTrack`
//! Contains the transcript data model, GPA math, graduation requirement
//! tracking, course-name resolution, and roster import used by the CLI.

pub mod core;

pub use core::config;
pub use core::{gpa, importer, models, requirements, resolver};

/// Returns the crate version string.
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
