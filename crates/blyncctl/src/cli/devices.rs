//! `devices` subcommand — list attached Blynclights.

use super::{BLYNCLIGHT, DevicesOutput, Result, device};

pub(super) fn cmd_devices(json: bool) -> Result<()> {
    let devices = device::enumerate_devices(&BLYNCLIGHT);

    if json {
        let output = DevicesOutput {
            count: devices.len(),
            devices,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    if devices.is_empty() {
        println!("No Blynclight devices found.");
        return Ok(());
    }

    println!(
        "Found {} Blynclight device{}:",
        devices.len(),
        if devices.len() == 1 { "" } else { "s" }
    );
    println!();

    for (i, dev) in devices.iter().enumerate() {
        println!("  [{}] {}", i + 1, dev.path);
        if !dev.product.is_empty() {
            println!("      Product: {}", dev.product);
        }
        if let Some(ref serial) = dev.serial {
            println!("      Serial:  {serial}");
        }
    }

    Ok(())
}
