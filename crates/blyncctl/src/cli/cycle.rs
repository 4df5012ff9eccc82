//! `cycle` subcommand — loop red, green, blue until interrupted.

use std::time::Duration;

use blyncctl_lib::effects;

use super::{Config, Light, LightCommand, RUNNING, Result, encode, open_backend};

pub(super) fn cmd_cycle(interval_ms: Option<u64>, dry_run: bool) -> Result<()> {
    let config = Config::load();
    let interval = interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.cycle_interval());

    let light = open_backend(dry_run)?;
    println!("[device] {}", light.info().path);
    println!(
        "Cycling red, green, blue every {}ms. Press Ctrl+C to stop.",
        interval.as_millis()
    );

    effects::run_cycle(light.as_ref(), interval, None, &RUNNING)?;

    // Interrupted: leave the light dark rather than stuck on the last color.
    let _ = light.send(&encode(&LightCommand::off()));
    println!();
    println!("Done.");
    Ok(())
}
