//! Host-side repetition wrappers for the `cycle` and `pulse` commands.
//!
//! Each iteration is an independent, idempotent encode+send; there is no
//! state machine. The loops poll a shared running flag between fixed-delay
//! sleeps and stop on the first failed send, since device state is unknown
//! after a write error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::color::Rgb;
use crate::device::Light;
use crate::error::DeviceResult;
use crate::report::{LightCommand, encode};

/// Colors sent by one `cycle` round, in order.
pub const CYCLE_COLORS: [Rgb; 3] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];

/// Cycle through red, green, blue, each send followed by `interval`.
///
/// Runs `rounds` full rounds, or until `running` clears when `rounds` is
/// `None`. A failed send aborts the loop and surfaces the error.
pub fn run_cycle(
    light: &dyn Light,
    interval: Duration,
    rounds: Option<usize>,
    running: &AtomicBool,
) -> DeviceResult<()> {
    let mut done = 0usize;
    while running.load(Ordering::SeqCst) {
        if let Some(n) = rounds
            && done >= n
        {
            break;
        }
        for color in CYCLE_COLORS {
            if !running.load(Ordering::SeqCst) {
                break;
            }
            light.send(&encode(&LightCommand::solid(color)))?;
            std::thread::sleep(interval);
        }
        done += 1;
    }
    Ok(())
}

/// Pulse a color by alternating its "on" and "off" reports.
///
/// One iteration is an on-send and an off-send, each followed by `interval`.
/// Runs `iterations` pulses, or until `running` clears when `None`.
pub fn run_pulse(
    light: &dyn Light,
    color: Rgb,
    interval: Duration,
    iterations: Option<u32>,
    running: &AtomicBool,
) -> DeviceResult<()> {
    let on = encode(&LightCommand::solid(color));
    let off = encode(&LightCommand::off());
    let mut done = 0u32;
    while running.load(Ordering::SeqCst) {
        if let Some(n) = iterations
            && done >= n
        {
            break;
        }
        light.send(&on)?;
        std::thread::sleep(interval);
        if !running.load(Ordering::SeqCst) {
            break;
        }
        light.send(&off)?;
        std::thread::sleep(interval);
        done += 1;
    }
    Ok(())
}
