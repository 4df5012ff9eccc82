//! CLI subcommands — light control, device listing, configuration.

mod color_cmd;
mod config_cmd;
mod cycle;
mod devices;
mod off;
mod pulse;
mod status;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use blyncctl_lib::color::{Rgb, format_color, parse_color};
pub(super) use blyncctl_lib::config::Config;
pub(super) use blyncctl_lib::device::{
    self, DiscoveredLight, Light, SimulatedLight, open_light,
};
pub(super) use blyncctl_lib::error::Result;
pub(super) use blyncctl_lib::protocol::BLYNCLIGHT;
pub(super) use blyncctl_lib::report::{FlashSpeed, LightCommand, encode};

/// Parse and validate a color argument once, at the CLI boundary.
fn color_arg(s: &str) -> std::result::Result<Rgb, String> {
    parse_color(s).map_err(|e| e.to_string())
}

/// Flash rate argument.
#[derive(ValueEnum, Debug, Copy, Clone)]
pub enum SpeedArg {
    Slow,
    Fast,
}

impl From<SpeedArg> for FlashSpeed {
    fn from(s: SpeedArg) -> Self {
        match s {
            SpeedArg::Slow => FlashSpeed::Slow,
            SpeedArg::Fast => FlashSpeed::Fast,
        }
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct DevicesOutput {
    pub count: usize,
    pub devices: Vec<DiscoveredLight>,
}

#[derive(Serialize)]
pub(super) struct StatusOutput {
    pub version: String,
    pub device: Option<DiscoveredLight>,
    pub config: ConfigSummaryJson,
}

#[derive(Serialize)]
pub(super) struct ConfigSummaryJson {
    pub color: String,
    pub flash_speed: String,
    pub cycle_interval_ms: u64,
    pub pulse_interval_ms: u64,
    pub pulse_iterations: u32,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub problems: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set a solid or flashing color
    Color {
        /// Color name or #RRGGBB (defaults to the configured color)
        #[arg(value_parser = color_arg)]
        color: Option<Rgb>,
        /// Let the device flash the color instead of holding it steady
        #[arg(long)]
        flash: bool,
        /// Flash rate (only meaningful with --flash)
        #[arg(long, value_enum)]
        speed: Option<SpeedArg>,
    },

    /// Cycle through red, green, blue until interrupted
    Cycle {
        /// Delay between color changes in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Pulse a color on and off
    Pulse {
        /// Color name or #RRGGBB (defaults to the configured color)
        #[arg(value_parser = color_arg)]
        color: Option<Rgb>,
        /// Number of pulses (0 = until interrupted)
        #[arg(long)]
        iterations: Option<u32>,
        /// Delay between sends in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Turn the light off
    Off,

    /// List attached Blynclights
    Devices,

    /// Show device presence and effective configuration
    Status,

    /// Show configuration file path and contents
    Config,
}

/// Open the hardware light, or the simulated backend under `--dry-run`.
pub(super) fn open_backend(dry_run: bool) -> Result<Box<dyn Light>> {
    if dry_run {
        return Ok(Box::new(SimulatedLight::new()));
    }
    Ok(Box::new(open_light(&BLYNCLIGHT)?))
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool, dry_run: bool) -> Result<()> {
    match cmd {
        Command::Color { color, flash, speed } => {
            if json {
                warn_json_unsupported("color");
            }
            color_cmd::cmd_color(color, flash, speed, dry_run)
        }
        Command::Cycle { interval_ms } => {
            if json {
                warn_json_unsupported("cycle");
            }
            cycle::cmd_cycle(interval_ms, dry_run)
        }
        Command::Pulse {
            color,
            iterations,
            interval_ms,
        } => {
            if json {
                warn_json_unsupported("pulse");
            }
            pulse::cmd_pulse(color, iterations, interval_ms, dry_run)
        }
        Command::Off => {
            if json {
                warn_json_unsupported("off");
            }
            off::cmd_off(dry_run)
        }
        Command::Devices => devices::cmd_devices(json),
        Command::Status => status::cmd_status(json),
        Command::Config => config_cmd::cmd_config(json),
    }
}

#[cfg(test)]
mod json_struct_tests {
    use super::*;

    #[test]
    fn config_summary_json_has_expected_fields() {
        let summary = ConfigSummaryJson {
            color: "#FF0000".into(),
            flash_speed: "slow".into(),
            cycle_interval_ms: 500,
            pulse_interval_ms: 500,
            pulse_iterations: 3,
        };
        let json = serde_json::to_value(&summary).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5, "ConfigSummaryJson should have 5 fields");
        assert!(obj.contains_key("color"));
        assert!(obj.contains_key("flash_speed"));
        assert!(obj.contains_key("cycle_interval_ms"));
        assert!(obj.contains_key("pulse_interval_ms"));
        assert!(obj.contains_key("pulse_iterations"));
    }

    #[test]
    fn status_output_with_null_device() {
        let output = StatusOutput {
            version: "0.2.0".into(),
            device: None,
            config: ConfigSummaryJson {
                color: "#FF0000".into(),
                flash_speed: "slow".into(),
                cycle_interval_ms: 500,
                pulse_interval_ms: 500,
                pulse_iterations: 3,
            },
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["version"], "0.2.0");
        assert!(parsed["device"].is_null());
        assert_eq!(parsed["config"]["pulse_iterations"], 3);
    }

    #[test]
    fn devices_output_empty() {
        let output = DevicesOutput {
            count: 0,
            devices: vec![],
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["count"], 0);
        assert!(parsed["devices"].as_array().unwrap().is_empty());
    }

    #[test]
    fn config_output_missing_path_is_null() {
        let output = ConfigOutput {
            config_file: None,
            config_file_exists: false,
            settings: Config::default(),
            problems: vec![],
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["config_file"].is_null());
        assert_eq!(parsed["settings"]["color"], "red");
        assert!(parsed["problems"].as_array().unwrap().is_empty());
    }
}

#[cfg(test)]
mod arg_tests {
    use super::*;

    #[test]
    fn color_arg_accepts_names_and_hex() {
        assert_eq!(color_arg("red").unwrap(), Rgb::RED);
        assert_eq!(color_arg("#0000FF").unwrap(), Rgb::BLUE);
    }

    #[test]
    fn color_arg_rejects_garbage() {
        let err = color_arg("chartreuse").unwrap_err();
        assert!(err.contains("Invalid color"));
    }

    #[test]
    fn speed_arg_converts_to_flash_speed() {
        assert_eq!(FlashSpeed::from(SpeedArg::Slow), FlashSpeed::Slow);
        assert_eq!(FlashSpeed::from(SpeedArg::Fast), FlashSpeed::Fast);
    }
}
