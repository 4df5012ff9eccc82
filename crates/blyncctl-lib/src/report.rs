//! Light command encoding.
//!
//! [`encode`] is a pure function from a [`LightCommand`] to the fixed 8-byte
//! output report. Same command in, byte-identical report out, every call.

use crate::color::Rgb;
use crate::protocol::{
    BYTE_BLUE, BYTE_FLASH, BYTE_GREEN, BYTE_PAD, BYTE_RED, BYTE_SPEED, FLASH_OFF, FLASH_ON,
    REPORT_LEN, SPEED_FAST, SPEED_SLOW, TRAILER,
};

/// Fixed-length output report as written to the device.
pub type LightReport = [u8; REPORT_LEN];

/// Flash rate, meaningful only under [`Mode::Flash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashSpeed {
    #[default]
    Slow,
    Fast,
}

impl FlashSpeed {
    fn speed_byte(self) -> u8 {
        match self {
            FlashSpeed::Slow => SPEED_SLOW,
            FlashSpeed::Fast => SPEED_FAST,
        }
    }
}

/// Steady or device-driven flashing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Solid,
    Flash(FlashSpeed),
}

/// Desired device state for a single report.
///
/// Constructed from validated CLI input, encoded once, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    pub color: Rgb,
    pub mode: Mode,
}

impl LightCommand {
    /// Solid color command.
    pub fn solid(color: Rgb) -> Self {
        LightCommand { color, mode: Mode::Solid }
    }

    /// Flashing color command.
    pub fn flash(color: Rgb, speed: FlashSpeed) -> Self {
        LightCommand { color, mode: Mode::Flash(speed) }
    }

    /// All channels dark.
    pub fn off() -> Self {
        LightCommand::solid(Rgb::OFF)
    }
}

/// Encode a command into the device's output report.
///
/// The wire channel order is red, blue, green. Solid commands zero both mode
/// bytes; flash commands set the flash flag and rate.
pub fn encode(cmd: &LightCommand) -> LightReport {
    let mut report = [0u8; REPORT_LEN];
    report[BYTE_RED] = cmd.color.r;
    report[BYTE_BLUE] = cmd.color.b;
    report[BYTE_GREEN] = cmd.color.g;
    let (flash, speed) = match cmd.mode {
        Mode::Solid => (FLASH_OFF, 0x00),
        Mode::Flash(rate) => (FLASH_ON, rate.speed_byte()),
    };
    report[BYTE_FLASH] = flash;
    report[BYTE_SPEED] = speed;
    report[BYTE_PAD] = 0x00;
    report[REPORT_LEN - 2..].copy_from_slice(&TRAILER);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_red_matches_device_fixture() {
        // Known-good "solid red" report captured from the device protocol.
        let report = encode(&LightCommand::solid(Rgb::RED));
        assert_eq!(report, [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn solid_green_uses_wire_channel_order() {
        // Green lands at byte 2, not byte 1: wire order is red, blue, green.
        let report = encode(&LightCommand::solid(Rgb::GREEN));
        assert_eq!(report, [0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn solid_blue_uses_wire_channel_order() {
        let report = encode(&LightCommand::solid(Rgb::BLUE));
        assert_eq!(report, [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn off_is_all_dark() {
        let report = encode(&LightCommand::off());
        assert_eq!(report, [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn report_length_fixed_for_all_inputs() {
        for cmd in [
            LightCommand::solid(Rgb::RED),
            LightCommand::flash(Rgb { r: 1, g: 2, b: 3 }, FlashSpeed::Fast),
            LightCommand::off(),
        ] {
            assert_eq!(encode(&cmd).len(), REPORT_LEN);
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        // No hidden state: repeated calls yield byte-identical output.
        let cmd = LightCommand::flash(Rgb { r: 0x12, g: 0x34, b: 0x56 }, FlashSpeed::Slow);
        assert_eq!(encode(&cmd), encode(&cmd));
        assert_eq!(encode(&cmd), encode(&cmd));
    }

    #[test]
    fn flash_speeds_differ_only_in_speed_byte() {
        let slow = encode(&LightCommand::flash(Rgb::RED, FlashSpeed::Slow));
        let fast = encode(&LightCommand::flash(Rgb::RED, FlashSpeed::Fast));
        for (i, (s, f)) in slow.iter().zip(fast.iter()).enumerate() {
            if i == crate::protocol::BYTE_SPEED {
                assert_ne!(s, f, "speed byte must differ");
            } else {
                assert_eq!(s, f, "byte {i} must be identical across speeds");
            }
        }
    }

    #[test]
    fn flash_differs_from_solid_only_in_mode_bytes() {
        let solid = encode(&LightCommand::solid(Rgb::RED));
        let flash = encode(&LightCommand::flash(Rgb::RED, FlashSpeed::Slow));
        for (i, (s, f)) in solid.iter().zip(flash.iter()).enumerate() {
            if i == crate::protocol::BYTE_FLASH || i == crate::protocol::BYTE_SPEED {
                assert_ne!(s, f, "mode byte {i} must differ");
            } else {
                assert_eq!(s, f, "byte {i} must be identical across modes");
            }
        }
    }

    #[test]
    fn arbitrary_intensities_carried_verbatim() {
        let report = encode(&LightCommand::solid(Rgb { r: 0x10, g: 0x20, b: 0x30 }));
        assert_eq!(report[0], 0x10);
        assert_eq!(report[1], 0x30);
        assert_eq!(report[2], 0x20);
    }

    #[test]
    fn trailer_always_present() {
        for cmd in [
            LightCommand::solid(Rgb::OFF),
            LightCommand::flash(Rgb::BLUE, FlashSpeed::Fast),
        ] {
            let report = encode(&cmd);
            assert_eq!(&report[REPORT_LEN - 2..], &TRAILER);
        }
    }
}
