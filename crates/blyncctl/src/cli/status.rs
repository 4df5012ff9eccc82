//! `status` subcommand — show device presence and effective configuration.

use super::{
    BLYNCLIGHT, Config, ConfigSummaryJson, Result, StatusOutput, device, format_color, parse_color,
};

pub(super) fn cmd_status(json: bool) -> Result<()> {
    let config = Config::load();
    // Enumeration only: opening would claim the interface just to look at it.
    let attached = device::enumerate_devices(&BLYNCLIGHT).into_iter().next();

    let color_display = match parse_color(&config.color) {
        Ok(val) => format_color(val),
        Err(_) => format!("{} (invalid)", config.color),
    };

    if json {
        let output = StatusOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            device: attached,
            config: ConfigSummaryJson {
                color: color_display,
                flash_speed: config.flash_speed.clone(),
                cycle_interval_ms: config.cycle_interval_ms,
                pulse_interval_ms: config.pulse_interval_ms,
                pulse_iterations: config.pulse_iterations,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    println!("Version:  {}", env!("CARGO_PKG_VERSION"));
    match &attached {
        Some(dev) => {
            println!("Device:   {}", dev.path);
            if !dev.product.is_empty() {
                println!("          {}", dev.product);
            }
            if let Some(ref serial) = dev.serial {
                println!("          Serial: {serial}");
            }
        }
        None => println!("Device:   not found"),
    }
    println!();
    println!("Config:");
    println!("  color:             {color_display}");
    println!("  flash_speed:       {}", config.flash_speed);
    println!("  cycle_interval_ms: {}", config.cycle_interval_ms);
    println!("  pulse_interval_ms: {}", config.pulse_interval_ms);
    println!("  pulse_iterations:  {}", config.pulse_iterations);
    Ok(())
}
