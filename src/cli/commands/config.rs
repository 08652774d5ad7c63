//! Config command handler

use crate::args::ConfigSubcommand;
use gradetrack::config::Config;
use logger::debug;
use std::io::{self, Write};

/// Keys accepted by `config get`, `set`, and `unset`.
const KNOWN_KEYS: &[&str] = &["level", "file", "verbose", "transcripts_dir", "threshold"];

/// Dispatch config subcommands.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            print_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn print_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    println!("\nKeys: {}", KNOWN_KEYS.join(", "));
}

fn get(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        None => {
            print_all(config);
            Ok(())
        }
        Some(key) => config
            .get(key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    persist(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    persist(config)?;
    println!("✓ Restored {key} to its default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if confirm("Reset all configuration to defaults?")? {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    debug!("Saving config to {}", Config::get_config_file_path().display());
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn confirm(prompt: &str) -> Result<bool, String> {
    print!("{prompt} [y/N] ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .map_err(|e| e.to_string())?;
    let response = response.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_keys_are_all_readable() {
        let config = Config::from_defaults();
        for key in KNOWN_KEYS {
            assert!(config.get(key).is_some(), "'{key}' should be readable");
        }
    }

    #[test]
    fn get_rejects_unknown_keys() {
        let config = Config::from_defaults();
        let err = get(&config, Some("no_such_key")).expect_err("unknown key");
        assert!(err.contains("no_such_key"));
        assert!(get(&config, Some("threshold")).is_ok());
    }
}
