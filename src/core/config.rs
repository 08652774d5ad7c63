//! Configuration module for `GradeTrack`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for imported transcript files
    #[serde(default)]
    pub transcripts_dir: String,
}

const fn default_threshold() -> f64 {
    crate::core::resolver::DEFAULT_THRESHOLD
}

/// Course-name resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum score for an accepted course-name match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override transcripts output directory
    pub transcripts_dir: Option<String>,
    /// Override resolver acceptance threshold
    pub threshold: Option<f64>,
}

impl Config {
    /// Get the `$GRADETRACK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradetrack`
    /// - macOS: `~/Library/Application Support/gradetrack`
    /// - Windows: `%APPDATA%\gradetrack`
    #[must_use]
    pub fn get_gradetrack_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradetrack")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration to ensure that newly added fields are
    /// populated with their default values. Only fields that are empty in the
    /// current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.transcripts_dir.is_empty() && !defaults.paths.transcripts_dir.is_empty() {
            self.paths
                .transcripts_dir
                .clone_from(&defaults.paths.transcripts_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// This allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct will replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(transcripts_dir) = &overrides.transcripts_dir {
            self.paths.transcripts_dir.clone_from(transcripts_dir);
        }

        if let Some(threshold) = overrides.threshold {
            self.resolver.threshold = threshold;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by [`get_gradetrack_dir`].
    ///
    /// [`get_gradetrack_dir`]: Self::get_gradetrack_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradetrack_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADETRACK` variable in a string
    ///
    /// Replaces occurrences of `$GRADETRACK` with the actual gradetrack
    /// directory path, so configuration values can reference the config
    /// directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GRADETRACK") {
            let gradetrack_dir = Self::get_gradetrack_dir();
            value.replace("$GRADETRACK", gradetrack_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$GRADETRACK`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.transcripts_dir = Self::expand_variables(&config.paths.transcripts_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// This is the primary way to load configuration:
    /// - If the config file exists: loads from file, merges missing fields
    ///   from defaults, saves the updated config
    /// - If it doesn't exist (first run): creates the config directory if
    ///   needed, loads defaults, saves them to file
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file. The config directory is created if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config cannot be serialized to TOML (shouldn't happen)
    /// - The config directory cannot be created
    /// - The file cannot be written (permissions, disk full, etc.)
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `transcripts_dir`: Transcript output directory path
    /// - `threshold`: Resolver acceptance threshold
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "transcripts_dir" | "transcripts-dir" => Some(self.paths.transcripts_dir.clone()),
            "threshold" => Some(self.resolver.threshold.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist
    /// changes. Values are validated and converted to the appropriate type.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not recognized
    /// - The value cannot be parsed (e.g., "maybe" for verbose boolean)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "transcripts_dir" | "transcripts-dir" => {
                self.paths.transcripts_dir = value.to_string();
            }
            "threshold" => {
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid number for 'threshold': '{value}'"))?;
                if !(0.0..=1.0).contains(&parsed) {
                    return Err(format!(
                        "'threshold' must be between 0.0 and 1.0, got '{value}'"
                    ));
                }
                self.resolver.threshold = parsed;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single configuration value to its default, taken from the
    /// provided defaults config (typically [`from_defaults()`](Config::from_defaults)).
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "transcripts_dir" | "transcripts-dir" => self
                .paths
                .transcripts_dir
                .clone_from(&defaults.paths.transcripts_dir),
            "threshold" => self.resolver.threshold = defaults.resolver.threshold,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. This
    /// removes all user customizations; the CLI requires confirmation before
    /// calling it. Succeeds without doing anything if the file is absent.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    /// (permissions, file locked, etc.)
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  transcripts_dir = \"{}\"", self.paths.transcripts_dir)?;

        writeln!(f, "\n[resolver]")?;
        writeln!(f, "  threshold = {}", self.resolver.threshold)?;

        Ok(())
    }
}
