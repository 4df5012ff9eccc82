//! Unified error type for the blyncctl-lib crate.
//!
//! [`BlyncctlError`] wraps the transport-level [`DeviceError`] and
//! domain-specific error kinds (`Config`, `Color`). `From` impls allow `?`
//! to propagate across module boundaries seamlessly.

use std::fmt;

// ── Device errors ──

/// Device communication errors.
///
/// String payloads follow the convention **"context: details"** where
/// *context* identifies the operation or step (e.g. `"USB open"`,
/// `"claim interface"`) and *details* describes what went wrong.
#[derive(Debug)]
pub enum DeviceError {
    /// No device matching the vendor/product id is attached.
    NotFound,
    /// The device exists but exclusive access could not be obtained.
    Busy(String),
    /// The device could not be opened for another reason.
    OpenFailed(String),
    /// A report write failed after the handle was opened.
    WriteFailed(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NotFound => write!(f, "Blynclight not found. Is it plugged in?"),
            DeviceError::Busy(e) => write!(f, "Device busy: {e}"),
            DeviceError::OpenFailed(e) => write!(f, "Failed to open device: {e}"),
            DeviceError::WriteFailed(e) => write!(f, "Write failed: {e}"),
        }
    }
}

impl std::error::Error for DeviceError {}

/// Result alias for device operations.
pub type DeviceResult<T> = std::result::Result<T, DeviceError>;

// ── Crate-level error ──

/// Unified error type for blyncctl-lib operations.
#[derive(Debug)]
pub enum BlyncctlError {
    /// Device communication error (open, claim, report write).
    Device(DeviceError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for BlyncctlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlyncctlError::Device(e) => write!(f, "{e}"),
            BlyncctlError::Io(e) => write!(f, "I/O error: {e}"),
            BlyncctlError::Config(e) => write!(f, "Config error: {e}"),
            BlyncctlError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for BlyncctlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlyncctlError::Device(e) => Some(e),
            BlyncctlError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DeviceError> for BlyncctlError {
    fn from(e: DeviceError) -> Self {
        BlyncctlError::Device(e)
    }
}

impl From<std::io::Error> for BlyncctlError {
    fn from(e: std::io::Error) -> Self {
        BlyncctlError::Io(e)
    }
}

/// Crate-level Result alias using [`BlyncctlError`].
pub type Result<T> = std::result::Result<T, BlyncctlError>;
