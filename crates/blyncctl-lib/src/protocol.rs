//! Protocol constants for the Embrava Blynclight (BLYNCUSB30-152).
//!
//! The device has no read-back path: reports are fire-and-forget writes, so a
//! wrong byte position produces a different-but-undetected light state. All
//! values here were taken from a known-good host implementation, not guessed.
//!
//! Reports are written as a HID SET_REPORT class request on the control
//! endpoint: `bmRequestType 0x21, bRequest 0x09, wValue 0x0200, wIndex 0`,
//! carrying the 8-byte payload described below.

// ── USB identifiers ──

/// Vendor/product identifier pair used to locate the device.
///
/// Passed explicitly to [`crate::device::UsbLight::open`] rather than read
/// from a global, so tests and future device revisions can substitute ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl std::fmt::Display for UsbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

/// The Blynclight BLYNCUSB30-152.
pub const BLYNCLIGHT: UsbId = UsbId {
    vendor_id: 0x0E53,
    product_id: 0x2516,
};

// ── Control transfer parameters (HID SET_REPORT) ──

/// `bRequest` for HID SET_REPORT.
pub const REQ_SET_REPORT: u8 = 0x09;

/// `wValue`: report type Output (0x02), report id 0.
pub const VALUE_OUTPUT_REPORT: u16 = 0x0200;

/// `wIndex`: interface number carrying the HID endpoint.
pub const REPORT_INTERFACE: u8 = 0;

/// Timeout per control transfer in milliseconds.
pub const USB_TIMEOUT_MS: u64 = 1000;

// ── Report layout ──
//
// The wire channel order is red, blue, green — not RGB.

/// Fixed report length in bytes.
pub const REPORT_LEN: usize = 8;

/// Red intensity, 0-255.
pub const BYTE_RED: usize = 0;

/// Blue intensity, 0-255.
pub const BYTE_BLUE: usize = 1;

/// Green intensity, 0-255.
pub const BYTE_GREEN: usize = 2;

/// Flash flag: [`FLASH_OFF`] or [`FLASH_ON`].
pub const BYTE_FLASH: usize = 3;

/// Flash speed: 0 when solid, [`SPEED_SLOW`] or [`SPEED_FAST`] when flashing.
pub const BYTE_SPEED: usize = 4;

/// Constant zero padding.
pub const BYTE_PAD: usize = 5;

/// Constant trailer occupying the final two report bytes.
pub const TRAILER: [u8; 2] = [0xFF, 0xFF];

// ── Mode byte values ──

/// Solid color: device holds the last written intensities.
pub const FLASH_OFF: u8 = 0x00;

/// Flashing: device blinks the written color autonomously.
pub const FLASH_ON: u8 = 0x01;

/// Slow flash rate.
pub const SPEED_SLOW: u8 = 0x01;

/// Fast flash rate.
pub const SPEED_FAST: u8 = 0x04;
