//! `config` subcommand — show configuration file path and contents.

use super::{Config, ConfigOutput, Result, format_color, parse_color};

pub(super) fn cmd_config(json: bool) -> Result<()> {
    let config = Config::load();
    let config_path = Config::path();
    let config_exists = config_path.as_ref().map(|p| p.exists()).unwrap_or(false);
    let problems = config.validate();

    if json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
            problems,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    match &config_path {
        Some(p) => {
            if config_exists {
                println!("Config file: {} (loaded)", p.display());
            } else {
                println!("Config file: {} (not found, using defaults)", p.display());
            }
        }
        None => println!("Config file: (no config directory)"),
    }
    println!();

    println!("Settings:");
    let color_display = match parse_color(&config.color) {
        Ok(val) => format!("{} -> {}", config.color, format_color(val)),
        Err(_) => format!("{} (invalid)", config.color),
    };
    println!("  color:             {color_display}");
    println!("  flash_speed:       {}", config.flash_speed);
    println!("  cycle_interval_ms: {}", config.cycle_interval_ms);
    println!("  pulse_interval_ms: {}", config.pulse_interval_ms);
    println!("  pulse_iterations:  {}", config.pulse_iterations);

    if !problems.is_empty() {
        println!();
        println!("Problems:");
        for p in &problems {
            println!("  {p}");
        }
    }
    Ok(())
}
