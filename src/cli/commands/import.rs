//! Roster import command handler

use gradetrack::config::Config;
use gradetrack::importer::{self, MatchRecord};
use gradetrack::models::{Semester, YearLevel};
use logger::{debug, info};
use std::path::{Path, PathBuf};

/// Import a roster CSV into per-student transcript files.
///
/// Writes one TOML file per student into the output directory (CLI flag, or
/// the configured `transcripts_dir`), then prints the resolution report.
pub fn run(
    input_file: &Path,
    year: YearLevel,
    semester: Semester,
    output: Option<&Path>,
    threshold: Option<f64>,
    config: &Config,
    verbose_output: bool,
) {
    let threshold = threshold.unwrap_or(config.resolver.threshold);
    debug!(
        "Importing {} for {year} {semester} (threshold {threshold})",
        input_file.display()
    );

    let rows = match importer::parse_roster_csv(input_file) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    if rows.is_empty() {
        eprintln!("✗ Roster {} contains no usable rows", input_file.display());
        std::process::exit(1);
    }

    let result = importer::import_rows(&rows, year, semester, threshold);

    let out_dir = output.map_or_else(
        || PathBuf::from(&config.paths.transcripts_dir),
        Path::to_path_buf,
    );
    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        eprintln!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        );
        std::process::exit(1);
    }

    let mut written = 0usize;
    for student in &result.students {
        let path = out_dir.join(importer::transcript_filename(student, year, semester));
        let serialized = match toml::to_string_pretty(student) {
            Ok(serialized) => serialized,
            Err(e) => {
                eprintln!("✗ Failed to serialize transcript for {}: {e}", student.name);
                continue;
            }
        };
        match std::fs::write(&path, serialized) {
            Ok(()) => {
                written += 1;
                if verbose_output {
                    println!("✓ Wrote {}", path.display());
                } else {
                    info!("Wrote transcript {}", path.display());
                }
            }
            Err(e) => eprintln!("✗ Failed to write {}: {e}", path.display()),
        }
    }

    print_match_report(&result.matches, verbose_output);

    let substituted = result.matches.iter().filter(|m| m.substituted).count();
    println!(
        "✓ Imported {} students ({} courses) into {}",
        result.students.len(),
        rows.len(),
        out_dir.display()
    );
    println!(
        "  {written} transcripts written, {substituted} course names substituted, {} kept as-is",
        result.matches.len() - substituted
    );
}

fn print_match_report(matches: &[MatchRecord], verbose_output: bool) {
    if matches.is_empty() {
        return;
    }

    println!("\n=== Course name resolution ===");
    for record in matches {
        if record.substituted {
            let matched = record.matched_course.as_deref().unwrap_or_default();
            println!(
                "✓ {}: '{}' -> '{}' (score {:.2})",
                record.student, record.original_course, matched, record.similarity
            );
            if verbose_output && !record.shared_tokens.is_empty() {
                println!("    shared words: {}", record.shared_tokens.join(", "));
            }
        } else if let Some(best) = &record.matched_course {
            let method = record.method.map_or("none", |m| m.label());
            println!(
                "✗ {}: '{}' kept as-is (best candidate '{}', score {:.2}, {method})",
                record.student, record.original_course, best, record.similarity
            );
        } else {
            println!(
                "✗ {}: '{}' kept as-is (no candidate)",
                record.student, record.original_course
            );
        }
    }
}
