//! `off` subcommand — turn the light off.

use super::{Light, LightCommand, Result, encode, open_backend};

pub(super) fn cmd_off(dry_run: bool) -> Result<()> {
    let light = open_backend(dry_run)?;
    light.send(&encode(&LightCommand::off()))?;
    println!("Light: off");
    Ok(())
}
