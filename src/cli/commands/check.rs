//! Graduation check command handler

use gradetrack::requirements::check_graduation;
use logger::debug;
use std::path::Path;

/// Check a transcript against every graduation requirement and print the
/// shortfalls.
pub fn run(student_file: &Path) {
    let student = match super::load_student(student_file) {
        Ok(student) => student,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    debug!("Checking graduation requirements for {}", student.name);
    println!("Student: {} ({})", student.name, student.student_id);

    let deficiencies = check_graduation(&student);
    if deficiencies.is_empty() {
        println!("✓ All graduation requirements met");
        return;
    }

    for deficiency in &deficiencies {
        println!("✗ {deficiency}");
    }
    let plural = if deficiencies.len() == 1 {
        "requirement"
    } else {
        "requirements"
    };
    println!("{} unmet {plural}", deficiencies.len());
}
