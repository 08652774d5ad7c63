//! CLI argument definitions for `GradeTrack`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradetrack::config::ConfigOverrides;
use gradetrack::models::{Semester, YearLevel};
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Year level CLI argument (grades 10-12)
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum YearArg {
    /// Grade 10
    G10,
    /// Grade 11
    G11,
    /// Grade 12
    G12,
}

impl From<YearArg> for YearLevel {
    fn from(arg: YearArg) -> Self {
        match arg {
            YearArg::G10 => Self::Grade10,
            YearArg::G11 => Self::Grade11,
            YearArg::G12 => Self::Grade12,
        }
    }
}

/// Semester CLI argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SemesterArg {
    /// Fall semester
    Fall,
    /// Spring semester
    Spring,
}

impl From<SemesterArg> for Semester {
    fn from(arg: SemesterArg) -> Self {
        match arg {
            SemesterArg::Fall => Self::Fall,
            SemesterArg::Spring => Self::Spring,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `threshold`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute GPA from a transcript file.
    ///
    /// Without --year, prints every semester, every year, and the overall GPA.
    /// With --year (and optionally --semester), restricts to that scope.
    Gpa {
        /// Path to a student transcript TOML file
        #[arg(value_name = "FILE")]
        student_file: PathBuf,

        /// Restrict to one year level
        #[arg(long, value_enum, value_name = "YEAR")]
        year: Option<YearArg>,

        /// Restrict to one semester (requires --year)
        #[arg(long, value_enum, value_name = "SEMESTER", requires = "year")]
        semester: Option<SemesterArg>,
    },
    /// Check graduation requirements for a transcript file.
    Check {
        /// Path to a student transcript TOML file
        #[arg(value_name = "FILE")]
        student_file: PathBuf,
    },
    /// Import a roster CSV into per-student transcript files.
    ///
    /// Course names are resolved against the curriculum catalog; each
    /// substitution is reported.
    Import {
        /// Path to a roster CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Year level the roster covers
        #[arg(long, value_enum, value_name = "YEAR")]
        year: YearArg,

        /// Semester the roster covers
        #[arg(long, value_enum, value_name = "SEMESTER")]
        semester: SemesterArg,

        /// Output directory (optional; defaults to config `transcripts_dir`)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Acceptance threshold for fuzzy matches (overrides config)
        #[arg(long, value_name = "SCORE")]
        threshold: Option<f64>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetrack",
    about = "GradeTrack command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config transcripts directory
    #[arg(long = "config-transcripts-dir", value_name = "DIR")]
    pub config_transcripts_dir: Option<PathBuf>,

    /// Override config transcripts directory (short form)
    #[arg(long = "transcripts-dir", value_name = "DIR")]
    pub transcripts_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--transcripts-dir`) take precedence over long-form flags (e.g.,
    /// `--config-transcripts-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            transcripts_dir: self
                .transcripts_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_transcripts_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            threshold: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_transcripts_dir: None,
            transcripts_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_year_and_semester_conversion() {
        assert_eq!(YearLevel::from(YearArg::G10), YearLevel::Grade10);
        assert_eq!(YearLevel::from(YearArg::G12), YearLevel::Grade12);
        assert_eq!(Semester::from(SemesterArg::Fall), Semester::Fall);
        assert_eq!(Semester::from(SemesterArg::Spring), Semester::Spring);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli(Command::Config { subcommand: None });
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.transcripts_dir.is_none());
        assert!(overrides.threshold.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.transcripts_dir = Some(PathBuf::from("/transcripts"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.transcripts_dir, Some("/transcripts".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_transcripts_dir = Some(PathBuf::from("/long/transcripts"));
        cli.transcripts_dir = Some(PathBuf::from("/short/transcripts"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.transcripts_dir,
            Some("/short/transcripts".to_string())
        );
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_transcripts_dir = Some(PathBuf::from("/long/transcripts"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.transcripts_dir,
            Some("/long/transcripts".to_string())
        );
    }
}
