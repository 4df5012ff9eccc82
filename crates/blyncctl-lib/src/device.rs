//! Device transport — trait, USB backend, simulated backend, mock.
//!
//! One process owns one handle for the duration of a run. Acquisition is
//! scoped: the USB interface is released on drop on every exit path,
//! including after a failed write.

use serde::Serialize;

use crate::error::{DeviceError, DeviceResult};
use crate::protocol::UsbId;
use crate::report::LightReport;

// ── Device info ──

/// Identification for an opened or discovered light.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    /// Bus path, e.g. `usb:001/004`, or a scheme marker for non-USB backends.
    pub path: String,
    /// Product string from the device descriptor.
    pub product: String,
    /// USB serial number, if the device reports one.
    pub serial: Option<String>,
}

// ── Trait ──

/// A status light that accepts fixed-length output reports.
///
/// Writes are fire-and-forget: the device offers no read-back, so `send`
/// reports transport failures only, never device-state mismatches.
pub trait Light {
    fn open(id: &UsbId) -> DeviceResult<Self>
    where
        Self: Sized;
    fn info(&self) -> &DeviceInfo;
    /// Write one report. Any transfer failure surfaces as `WriteFailed`.
    fn send(&self, report: &LightReport) -> DeviceResult<()>;
}

// ── Linux implementation ──

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::time::Duration;

    use nusb::transfer::{Control, ControlType, Recipient};

    use super::*;
    use crate::protocol::{REPORT_INTERFACE, REQ_SET_REPORT, USB_TIMEOUT_MS, VALUE_OUTPUT_REPORT};

    pub struct UsbLight {
        interface: nusb::Interface,
        info: DeviceInfo,
    }

    /// Map open/claim failures, distinguishing exclusive-access conflicts.
    fn open_error(context: &str, e: std::io::Error) -> DeviceError {
        if e.kind() == std::io::ErrorKind::ResourceBusy {
            DeviceError::Busy(format!("{context}: {e}"))
        } else {
            DeviceError::OpenFailed(format!("{context}: {e}"))
        }
    }

    impl Light for UsbLight {
        fn open(id: &UsbId) -> DeviceResult<Self> {
            let device_info = nusb::list_devices()
                .map_err(|e| DeviceError::OpenFailed(format!("USB enumeration: {e}")))?
                .find(|dev| {
                    dev.vendor_id() == id.vendor_id && dev.product_id() == id.product_id
                })
                .ok_or(DeviceError::NotFound)?;

            let product = device_info.product_string().unwrap_or_default().to_string();
            let serial = device_info.serial_number().map(|s| s.to_string());
            let bus_path = format!(
                "usb:{:03}/{:03}",
                device_info.bus_number(),
                device_info.device_address()
            );

            let usb_device = device_info
                .open()
                .map_err(|e| open_error("USB open", e))?;

            // Claim the HID interface (nusb detaches the kernel driver)
            let interface = usb_device
                .claim_interface(REPORT_INTERFACE)
                .map_err(|e| open_error(&format!("claim interface {REPORT_INTERFACE}"), e))?;

            log::debug!("opened {} at {bus_path}", id);

            Ok(UsbLight {
                interface,
                info: DeviceInfo {
                    path: bus_path,
                    product,
                    serial,
                },
            })
        }

        fn info(&self) -> &DeviceInfo {
            &self.info
        }

        fn send(&self, report: &LightReport) -> DeviceResult<()> {
            let control = Control {
                control_type: ControlType::Class,
                recipient: Recipient::Interface,
                request: REQ_SET_REPORT,
                value: VALUE_OUTPUT_REPORT,
                index: REPORT_INTERFACE as u16,
            };
            self.interface
                .control_out_blocking(control, report, Duration::from_millis(USB_TIMEOUT_MS))
                .map_err(|e| DeviceError::WriteFailed(format!("SET_REPORT: {e}")))?;
            Ok(())
        }
    }
}

#[cfg(target_os = "linux")]
pub use linux_impl::UsbLight;

// ── Stub for unsupported platforms ──

/// Placeholder backend that always reports `NotFound`.
/// Enables compilation and `cargo test` on unsupported hosts.
#[cfg(not(target_os = "linux"))]
pub struct StubLight;

#[cfg(not(target_os = "linux"))]
impl Light for StubLight {
    fn open(_id: &UsbId) -> DeviceResult<Self> {
        Err(DeviceError::NotFound)
    }
    fn info(&self) -> &DeviceInfo {
        unreachable!()
    }
    fn send(&self, _report: &LightReport) -> DeviceResult<()> {
        unreachable!()
    }
}

// ── Simulated backend ──

/// Dry-run backend: prints each report's decoded state instead of writing
/// USB. Stands in for hardware in demos and integration tests.
pub struct SimulatedLight {
    info: DeviceInfo,
}

impl SimulatedLight {
    pub fn new() -> Self {
        SimulatedLight {
            info: DeviceInfo {
                path: "simulated://blynclight".into(),
                product: "Blynclight (simulated)".into(),
                serial: None,
            },
        }
    }
}

impl Default for SimulatedLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Light for SimulatedLight {
    fn open(_id: &UsbId) -> DeviceResult<Self> {
        Ok(Self::new())
    }

    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn send(&self, report: &LightReport) -> DeviceResult<()> {
        use crate::color::{Rgb, format_color};
        use crate::protocol::{BYTE_BLUE, BYTE_FLASH, BYTE_GREEN, BYTE_RED, BYTE_SPEED, FLASH_ON, SPEED_FAST};

        let color = Rgb {
            r: report[BYTE_RED],
            g: report[BYTE_GREEN],
            b: report[BYTE_BLUE],
        };
        let mode = if report[BYTE_FLASH] == FLASH_ON {
            if report[BYTE_SPEED] == SPEED_FAST { "flash fast" } else { "flash slow" }
        } else {
            "solid"
        };
        println!("[simulate] {} {mode}", format_color(color));
        Ok(())
    }
}

// ── Device enumeration ──

/// A discovered light (not yet opened).
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredLight {
    pub path: String,
    pub product: String,
    pub serial: Option<String>,
}

/// Enumerate attached lights matching `id` without opening them.
///
/// On unsupported platforms, always returns an empty list.
pub fn enumerate_devices(id: &UsbId) -> Vec<DiscoveredLight> {
    #[cfg(target_os = "linux")]
    {
        enumerate_devices_linux(id)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = id;
        Vec::new()
    }
}

#[cfg(target_os = "linux")]
fn enumerate_devices_linux(id: &UsbId) -> Vec<DiscoveredLight> {
    let Ok(devices) = nusb::list_devices() else {
        return Vec::new();
    };

    devices
        .filter(|dev| dev.vendor_id() == id.vendor_id && dev.product_id() == id.product_id)
        .map(|dev| DiscoveredLight {
            path: format!(
                "usb:{:03}/{:03} [{:04x}:{:04x}]",
                dev.bus_number(),
                dev.device_address(),
                dev.vendor_id(),
                dev.product_id(),
            ),
            product: dev.product_string().unwrap_or_default().to_string(),
            serial: dev.serial_number().map(|s| s.to_string()),
        })
        .collect()
}

/// Concrete hardware backend for the current platform.
#[cfg(target_os = "linux")]
pub type PlatformLight = UsbLight;
#[cfg(not(target_os = "linux"))]
pub type PlatformLight = StubLight;

/// Open the platform-appropriate hardware light.
pub fn open_light(id: &UsbId) -> DeviceResult<PlatformLight> {
    PlatformLight::open(id)
}

// ── Mock light for testing ──

/// In-memory light for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Instant;

    use super::*;

    /// One recorded `send` call.
    #[derive(Debug, Clone)]
    pub struct SentReport {
        pub report: LightReport,
        pub at: Instant,
    }

    /// Test double recording every report with a timestamp. `fail_from`
    /// injects a `WriteFailed` on the nth send (0-based) and all later ones;
    /// the drop flag lets tests observe scoped handle release.
    pub struct MockLight {
        info: DeviceInfo,
        /// Recorded sends, in order.
        pub sent: RefCell<Vec<SentReport>>,
        /// If set, sends at index >= n fail.
        pub fail_from: Cell<Option<usize>>,
        closed: Arc<AtomicBool>,
    }

    impl Default for MockLight {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockLight {
        pub fn new() -> Self {
            MockLight {
                info: DeviceInfo {
                    path: "mock://blynclight".into(),
                    product: "Blynclight (mock)".into(),
                    serial: Some("MOCK123".into()),
                },
                sent: RefCell::new(Vec::new()),
                fail_from: Cell::new(None),
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Flag flipped to `true` when the mock is dropped. Clone it out
        /// before handing the mock to code under test.
        pub fn close_observer(&self) -> Arc<AtomicBool> {
            Arc::clone(&self.closed)
        }

        /// Recorded report bytes, in send order.
        pub fn reports(&self) -> Vec<LightReport> {
            self.sent.borrow().iter().map(|s| s.report).collect()
        }
    }

    impl Light for MockLight {
        fn open(_id: &UsbId) -> DeviceResult<Self> {
            Ok(Self::new())
        }

        fn info(&self) -> &DeviceInfo {
            &self.info
        }

        fn send(&self, report: &LightReport) -> DeviceResult<()> {
            let n = self.sent.borrow().len();
            if let Some(fail_from) = self.fail_from.get()
                && n >= fail_from
            {
                return Err(DeviceError::WriteFailed("mock: injected write failure".into()));
            }
            self.sent.borrow_mut().push(SentReport {
                report: *report,
                at: Instant::now(),
            });
            Ok(())
        }
    }

    impl Drop for MockLight {
        fn drop(&mut self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }
}
