//! Application configuration — TOML-based, platform-aware paths.
//!
//! CLI flags always win over config values; the config only supplies
//! defaults for omitted arguments.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::report::FlashSpeed;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# blyncctl configuration — changes made outside the tool may be overwritten.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default color for `color` and `pulse` (hex or name). Default: "red".
    #[serde(default = "default_color")]
    pub color: String,

    /// Default flash rate for `color --flash`: "slow" or "fast".
    #[serde(default = "default_flash_speed")]
    pub flash_speed: String,

    /// Delay between `cycle` sends in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub cycle_interval_ms: u64,

    /// Delay between `pulse` sends in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub pulse_interval_ms: u64,

    /// Number of pulses for `pulse` when `--iterations` is omitted.
    #[serde(default = "default_pulse_iterations")]
    pub pulse_iterations: u32,
}

fn default_color() -> String {
    "red".into()
}
fn default_flash_speed() -> String {
    "slow".into()
}
fn default_interval_ms() -> u64 {
    500
}
fn default_pulse_iterations() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: default_color(),
            flash_speed: default_flash_speed(),
            cycle_interval_ms: default_interval_ms(),
            pulse_interval_ms: default_interval_ms(),
            pulse_iterations: default_pulse_iterations(),
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("blyncctl"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Save config to an arbitrary path, creating parent directories.
    ///
    /// A header comment is prepended to warn that manual edits may be overwritten.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, format!("{CONFIG_HEADER}{serialized}"))
    }

    /// Save config to the default platform path.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory",
            ));
        };
        self.save_to(&path)
    }

    /// Parse the `flash_speed` field. Unrecognised values fall back to slow.
    pub fn parse_flash_speed(&self) -> FlashSpeed {
        match self.flash_speed.trim().to_lowercase().as_str() {
            "fast" => FlashSpeed::Fast,
            _ => FlashSpeed::Slow,
        }
    }

    /// Delay between `cycle` sends.
    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(self.cycle_interval_ms)
    }

    /// Delay between `pulse` sends.
    pub fn pulse_interval(&self) -> Duration {
        Duration::from_millis(self.pulse_interval_ms)
    }

    /// Check field values, returning one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = parse_color(&self.color) {
            problems.push(format!("color: {e}"));
        }
        let speed = self.flash_speed.trim().to_lowercase();
        if speed != "slow" && speed != "fast" {
            problems.push(format!(
                "flash_speed: \"{}\" is not \"slow\" or \"fast\"",
                self.flash_speed
            ));
        }
        if self.cycle_interval_ms == 0 {
            problems.push("cycle_interval_ms: must be greater than zero".into());
        }
        if self.pulse_interval_ms == 0 {
            problems.push("pulse_interval_ms: must be greater than zero".into());
        }
        problems
    }
}
