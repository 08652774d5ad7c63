//! GPA command handler

use gradetrack::gpa::{compute_gpa, course_count, GpaScope};
use gradetrack::models::{Semester, StudentRecord, YearLevel};
use logger::debug;
use std::path::Path;

/// Compute and print GPA for a transcript, optionally restricted to a year
/// or a single semester.
pub fn run(student_file: &Path, year: Option<YearLevel>, semester: Option<Semester>) {
    let student = match super::load_student(student_file) {
        Ok(student) => student,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    debug!(
        "Computing GPA for {} ({} courses on transcript)",
        student.name,
        student.course_total()
    );
    println!("Student: {} ({})", student.name, student.student_id);

    match (year, semester) {
        (Some(year), Some(semester)) => {
            print_scope_line(
                &student,
                GpaScope::Term(year, semester),
                &format!("{year} {semester}"),
            );
        }
        (Some(year), None) => {
            for semester in Semester::ALL {
                print_scope_line(
                    &student,
                    GpaScope::Term(year, semester),
                    &format!("{year} {semester}"),
                );
            }
            print_scope_line(&student, GpaScope::Year(year), &year.to_string());
        }
        (None, _) => {
            for year in YearLevel::ALL {
                for semester in Semester::ALL {
                    print_scope_line(
                        &student,
                        GpaScope::Term(year, semester),
                        &format!("{year} {semester}"),
                    );
                }
                print_scope_line(&student, GpaScope::Year(year), &year.to_string());
            }
            print_scope_line(&student, GpaScope::All, "Overall");
        }
    }
}

fn print_scope_line(student: &StudentRecord, scope: GpaScope, label: &str) {
    let courses = course_count(student, scope);
    if courses == 0 {
        println!("{label}: No courses data");
    } else {
        let gpa = compute_gpa(student, scope);
        let plural = if courses == 1 { "course" } else { "courses" };
        println!("{label}: GPA {gpa:.2} ({courses} {plural})");
    }
}
