//! `pulse` subcommand — pulse a color on and off.

use std::time::Duration;

use blyncctl_lib::effects;

use super::{Config, Light, RUNNING, Result, Rgb, format_color, open_backend, parse_color};

pub(super) fn cmd_pulse(
    color: Option<Rgb>,
    iterations: Option<u32>,
    interval_ms: Option<u64>,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load();
    let color = match color {
        Some(c) => c,
        None => parse_color(&config.color)?,
    };
    let interval = interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.pulse_interval());
    let iterations = match iterations {
        Some(0) => None, // 0 = until interrupted
        Some(n) => Some(n),
        None => Some(config.pulse_iterations),
    };

    let light = open_backend(dry_run)?;
    println!("[device] {}", light.info().path);
    match iterations {
        Some(n) => println!("Pulsing {} {n} time(s).", format_color(color)),
        None => println!("Pulsing {}. Press Ctrl+C to stop.", format_color(color)),
    }

    effects::run_pulse(light.as_ref(), color, interval, iterations, &RUNNING)?;

    println!("Done.");
    Ok(())
}
