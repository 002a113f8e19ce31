use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;

use libc::{c_char, c_int};
use log::trace;
use usb20_sys::libusb20_device;

use crate::error::{Error, Result};
use crate::fields::{Mode, PowerMode, Speed};
use crate::native::{Libusb20, Native};

/// A device reported by a [`Backend`](crate::Backend).
///
/// This is a view into the backend's device list, not an owned handle; it
/// cannot outlive the backend that produced it.
pub struct Device<'a, N: Native = Libusb20> {
    native: &'a N,
    raw: NonNull<libusb20_device>,
}

impl<'a, N: Native> Device<'a, N> {
    pub(crate) fn new(native: &'a N, raw: NonNull<libusb20_device>) -> Self {
        Device { native, raw }
    }

    /// Name of the host controller backend that enumerated the device.
    pub fn backend_name(&self) -> Cow<'a, str> {
        unsafe { native_str(self.native.dev_get_backend_name(self.raw.as_ptr())) }
    }

    /// Human readable description, e.g. `ugen0.2: <USB Keyboard> at usbus0`.
    pub fn description(&self) -> Cow<'a, str> {
        unsafe { native_str(self.native.dev_get_desc(self.raw.as_ptr())) }
    }

    /// Opens the device for exclusive access with transfers of up to
    /// `transfer_max` bytes.
    pub fn open(&self, transfer_max: u16) -> Result<()> {
        trace!("opening {:p} (transfer_max {})", self.raw, transfer_max);
        Error::check(unsafe { self.native.dev_open(self.raw.as_ptr(), transfer_max) })
    }

    pub fn close(&self) -> Result<()> {
        trace!("closing {:p}", self.raw);
        Error::check(unsafe { self.native.dev_close(self.raw.as_ptr()) })
    }

    pub fn mode(&self) -> Option<Mode> {
        Mode::from_raw(unsafe { self.native.dev_get_mode(self.raw.as_ptr()) })
    }

    pub fn speed(&self) -> Speed {
        Speed::from_raw(unsafe { self.native.dev_get_speed(self.raw.as_ptr()) })
    }

    pub fn bus_number(&self) -> u8 {
        unsafe { self.native.dev_get_bus_number(self.raw.as_ptr()) }
    }

    pub fn address(&self) -> u8 {
        unsafe { self.native.dev_get_address(self.raw.as_ptr()) }
    }

    /// Current power mode. The query goes through the device's control node,
    /// so it is only meaningful on an opened device; libusb20 answers `On`
    /// when the query itself fails.
    pub fn power_mode(&self) -> Option<PowerMode> {
        PowerMode::from_raw(unsafe { self.native.dev_get_power_mode(self.raw.as_ptr()) })
    }

    pub fn set_power_mode(&self, mode: PowerMode) -> Result<()> {
        let status: c_int =
            unsafe { self.native.dev_set_power_mode(self.raw.as_ptr(), mode.as_raw()) };
        Error::check(status)
    }
}

impl<N: Native> fmt::Display for Device<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl<N: Native> fmt::Debug for Device<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("raw", &self.raw)
            .field("backend_name", &self.backend_name())
            .field("description", &self.description())
            .finish()
    }
}

/// Borrows a string owned by the native device. Null reads as empty.
unsafe fn native_str<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    CStr::from_ptr(ptr).to_string_lossy()
}
