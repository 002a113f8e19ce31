//! In-memory [`Native`] implementation for tests.
//!
//! `StubBus` hands out pointers to its own `StubDevice`s and mimics the
//! status codes libusb20 returns for repeated open/close calls.

use std::cell::Cell;
use std::ffi::CString;
use std::ptr::{self, NonNull};
use std::rc::Rc;

use libc::{c_char, c_int};
use usb20_sys::{self as ffi, libusb20_backend, libusb20_device};

use crate::native::Native;

/// Counters shared between a `StubBus` and the test that built it.
#[derive(Debug, Default)]
pub struct StubLog {
    pub frees: Cell<usize>,
    pub foreach_calls: Cell<usize>,
}

#[derive(Debug)]
pub struct StubDevice {
    backend_name: CString,
    desc: CString,
    bus: u8,
    address: u8,
    speed: u8,
    mode: u8,
    open_status: c_int,
    opened: Cell<bool>,
    power: Cell<u8>,
}

impl StubDevice {
    pub fn new(backend_name: &str, desc: &str) -> Self {
        StubDevice {
            backend_name: CString::new(backend_name).unwrap_or_default(),
            desc: CString::new(desc).unwrap_or_default(),
            bus: 0,
            address: 1,
            speed: ffi::LIBUSB20_SPEED_HIGH,
            mode: ffi::LIBUSB20_MODE_HOST,
            open_status: ffi::LIBUSB20_SUCCESS,
            opened: Cell::new(false),
            power: Cell::new(ffi::LIBUSB20_POWER_ON),
        }
    }

    pub fn location(mut self, bus: u8, address: u8) -> Self {
        self.bus = bus;
        self.address = address;
        self
    }

    pub fn speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    pub fn mode(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }

    /// Raw byte `dev_get_power_mode` answers with until it is set.
    pub fn power(self, power_mode: u8) -> Self {
        self.power.set(power_mode);
        self
    }

    /// Status every `dev_open` call answers with.
    pub fn open_status(mut self, status: c_int) -> Self {
        self.open_status = status;
        self
    }
}

#[derive(Debug)]
pub struct StubBus {
    available: bool,
    devices: Vec<StubDevice>,
    log: Rc<StubLog>,
}

impl StubBus {
    /// A bus with a backend and no devices.
    pub fn new() -> Self {
        StubBus {
            available: true,
            devices: Vec::new(),
            log: Rc::default(),
        }
    }

    /// A bus whose backend allocation fails.
    pub fn unavailable() -> Self {
        StubBus {
            available: false,
            ..StubBus::new()
        }
    }

    pub fn with_device(mut self, device: StubDevice) -> Self {
        self.devices.push(device);
        self
    }

    pub fn log(&self) -> Rc<StubLog> {
        Rc::clone(&self.log)
    }

    fn index_of(&self, pdev: *mut libusb20_device) -> Option<usize> {
        self.devices
            .iter()
            .position(|d| ptr::eq(d as *const StubDevice as *const libusb20_device, pdev))
    }

    unsafe fn device(&self, pdev: *mut libusb20_device) -> &StubDevice {
        &*(pdev as *const StubDevice)
    }
}

impl Default for StubBus {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Native for StubBus {
    fn be_alloc_default(&self) -> *mut libusb20_backend {
        if self.available {
            NonNull::dangling().as_ptr()
        } else {
            ptr::null_mut()
        }
    }

    unsafe fn be_free(&self, _pbe: *mut libusb20_backend) {
        self.log.frees.set(self.log.frees.get() + 1);
    }

    unsafe fn be_device_foreach(
        &self,
        _pbe: *mut libusb20_backend,
        pdev: *mut libusb20_device,
    ) -> *mut libusb20_device {
        self.log.foreach_calls.set(self.log.foreach_calls.get() + 1);
        let next = if pdev.is_null() {
            0
        } else {
            match self.index_of(pdev) {
                Some(i) => i + 1,
                None => return ptr::null_mut(),
            }
        };
        match self.devices.get(next) {
            Some(d) => d as *const StubDevice as *mut libusb20_device,
            None => ptr::null_mut(),
        }
    }

    unsafe fn dev_get_backend_name(&self, pdev: *mut libusb20_device) -> *const c_char {
        self.device(pdev).backend_name.as_ptr()
    }

    unsafe fn dev_get_desc(&self, pdev: *mut libusb20_device) -> *const c_char {
        self.device(pdev).desc.as_ptr()
    }

    unsafe fn dev_open(&self, pdev: *mut libusb20_device, _transfer_max: u16) -> c_int {
        let dev = self.device(pdev);
        if dev.opened.get() {
            return ffi::LIBUSB20_ERROR_BUSY;
        }
        if dev.open_status == ffi::LIBUSB20_SUCCESS {
            dev.opened.set(true);
        }
        dev.open_status
    }

    unsafe fn dev_close(&self, pdev: *mut libusb20_device) -> c_int {
        let dev = self.device(pdev);
        if !dev.opened.replace(false) {
            return ffi::LIBUSB20_ERROR_OTHER;
        }
        ffi::LIBUSB20_SUCCESS
    }

    unsafe fn dev_get_mode(&self, pdev: *mut libusb20_device) -> u8 {
        self.device(pdev).mode
    }

    unsafe fn dev_get_speed(&self, pdev: *mut libusb20_device) -> u8 {
        self.device(pdev).speed
    }

    unsafe fn dev_get_bus_number(&self, pdev: *mut libusb20_device) -> u8 {
        self.device(pdev).bus
    }

    unsafe fn dev_get_address(&self, pdev: *mut libusb20_device) -> u8 {
        self.device(pdev).address
    }

    unsafe fn dev_get_power_mode(&self, pdev: *mut libusb20_device) -> u8 {
        self.device(pdev).power.get()
    }

    unsafe fn dev_set_power_mode(&self, pdev: *mut libusb20_device, power_mode: u8) -> c_int {
        if power_mode > ffi::LIBUSB20_POWER_RESUME {
            return ffi::LIBUSB20_ERROR_INVALID_PARAM;
        }
        self.device(pdev).power.set(power_mode);
        ffi::LIBUSB20_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Backend, Mode, PowerMode, Speed};

    #[test]
    fn device_queries_read_through() {
        let bus = StubBus::new().with_device(
            StubDevice::new("ugen2.3", "ugen2.3: <Mass Storage> at usbus2")
                .location(2, 3)
                .speed(ffi::LIBUSB20_SPEED_SUPER)
                .mode(ffi::LIBUSB20_MODE_DEVICE),
        );
        let backend = Backend::with_native(bus).unwrap();
        let dev = backend.devices().next().unwrap();

        assert_eq!(dev.bus_number(), 2);
        assert_eq!(dev.address(), 3);
        assert_eq!(dev.speed(), Speed::Super);
        assert_eq!(dev.mode(), Some(Mode::Device));
        assert_eq!(dev.power_mode(), Some(PowerMode::On));

        dev.set_power_mode(PowerMode::Suspend).unwrap();
        assert_eq!(dev.power_mode(), Some(PowerMode::Suspend));
    }

    #[test]
    fn power_mode_reads_the_native_byte() {
        let bus = StubBus::new()
            .with_device(StubDevice::new("ugen0.1", "saving").power(ffi::LIBUSB20_POWER_SAVE))
            .with_device(StubDevice::new("ugen0.2", "garbage").power(0x7f));
        let backend = Backend::with_native(bus).unwrap();
        let devices: Vec<_> = backend.devices().collect();

        assert_eq!(devices[0].power_mode(), Some(PowerMode::Save));
        assert_eq!(devices[1].power_mode(), None);
    }

    #[test]
    fn interior_nul_yields_empty_strings() {
        let backend =
            Backend::with_native(StubBus::new().with_device(StubDevice::new("a\0b", "x"))).unwrap();
        let dev = backend.devices().next().unwrap();
        assert_eq!(dev.backend_name(), "");
        assert_eq!(format!("{dev}"), "x");
    }
}
