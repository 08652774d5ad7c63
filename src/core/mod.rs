//! Core library: configuration, the transcript data model, GPA math,
//! graduation requirements, course-name resolution, and roster import.

pub mod config;
pub mod gpa;
pub mod importer;
pub mod models;
pub mod requirements;
pub mod resolver;
