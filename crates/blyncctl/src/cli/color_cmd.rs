//! `color` subcommand — set a solid or flashing color and exit.

use super::{
    Config, FlashSpeed, Light, LightCommand, Result, Rgb, SpeedArg, encode, format_color,
    open_backend, parse_color,
};

pub(super) fn cmd_color(
    color: Option<Rgb>,
    flash: bool,
    speed: Option<SpeedArg>,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load();
    let color = match color {
        Some(c) => c,
        None => parse_color(&config.color)?,
    };

    let cmd = if flash {
        let speed = speed
            .map(FlashSpeed::from)
            .unwrap_or_else(|| config.parse_flash_speed());
        LightCommand::flash(color, speed)
    } else {
        if speed.is_some() {
            log::warn!("--speed has no effect without --flash");
        }
        LightCommand::solid(color)
    };

    let light = open_backend(dry_run)?;
    light.send(&encode(&cmd))?;

    println!(
        "Light: {}{}",
        format_color(color),
        if flash { " (flashing)" } else { "" }
    );
    Ok(())
}
