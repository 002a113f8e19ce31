use libc::{c_char, c_int};
use usb20_sys::{self as ffi, libusb20_backend, libusb20_device};

/// The libusb20 entry points the wrapper calls, one method per C function.
///
/// `Backend` and `Device` only ever hand an implementation pointers it
/// returned itself, and never a device pointer after the backend that produced
/// it was freed.
///
/// # Safety
///
/// Implementors must keep every device pointer returned by
/// `be_device_foreach`, and every string returned for it, valid until
/// `be_free` is called on the owning backend.
pub unsafe trait Native {
    fn be_alloc_default(&self) -> *mut libusb20_backend;
    unsafe fn be_free(&self, pbe: *mut libusb20_backend);
    /// Next device after `pdev`, or the first one when `pdev` is null.
    unsafe fn be_device_foreach(
        &self,
        pbe: *mut libusb20_backend,
        pdev: *mut libusb20_device,
    ) -> *mut libusb20_device;

    unsafe fn dev_get_backend_name(&self, pdev: *mut libusb20_device) -> *const c_char;
    unsafe fn dev_get_desc(&self, pdev: *mut libusb20_device) -> *const c_char;
    unsafe fn dev_open(&self, pdev: *mut libusb20_device, transfer_max: u16) -> c_int;
    unsafe fn dev_close(&self, pdev: *mut libusb20_device) -> c_int;
    unsafe fn dev_get_mode(&self, pdev: *mut libusb20_device) -> u8;
    unsafe fn dev_get_speed(&self, pdev: *mut libusb20_device) -> u8;
    unsafe fn dev_get_bus_number(&self, pdev: *mut libusb20_device) -> u8;
    unsafe fn dev_get_address(&self, pdev: *mut libusb20_device) -> u8;
    unsafe fn dev_get_power_mode(&self, pdev: *mut libusb20_device) -> u8;
    unsafe fn dev_set_power_mode(&self, pdev: *mut libusb20_device, power_mode: u8) -> c_int;
}

/// The system libusb20 (`-lusb`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Libusb20;

unsafe impl Native for Libusb20 {
    fn be_alloc_default(&self) -> *mut libusb20_backend {
        unsafe { ffi::libusb20_be_alloc_default() }
    }

    unsafe fn be_free(&self, pbe: *mut libusb20_backend) {
        ffi::libusb20_be_free(pbe)
    }

    unsafe fn be_device_foreach(
        &self,
        pbe: *mut libusb20_backend,
        pdev: *mut libusb20_device,
    ) -> *mut libusb20_device {
        ffi::libusb20_be_device_foreach(pbe, pdev)
    }

    unsafe fn dev_get_backend_name(&self, pdev: *mut libusb20_device) -> *const c_char {
        ffi::libusb20_dev_get_backend_name(pdev)
    }

    unsafe fn dev_get_desc(&self, pdev: *mut libusb20_device) -> *const c_char {
        ffi::libusb20_dev_get_desc(pdev)
    }

    unsafe fn dev_open(&self, pdev: *mut libusb20_device, transfer_max: u16) -> c_int {
        ffi::libusb20_dev_open(pdev, transfer_max)
    }

    unsafe fn dev_close(&self, pdev: *mut libusb20_device) -> c_int {
        ffi::libusb20_dev_close(pdev)
    }

    unsafe fn dev_get_mode(&self, pdev: *mut libusb20_device) -> u8 {
        ffi::libusb20_dev_get_mode(pdev)
    }

    unsafe fn dev_get_speed(&self, pdev: *mut libusb20_device) -> u8 {
        ffi::libusb20_dev_get_speed(pdev)
    }

    unsafe fn dev_get_bus_number(&self, pdev: *mut libusb20_device) -> u8 {
        ffi::libusb20_dev_get_bus_number(pdev)
    }

    unsafe fn dev_get_address(&self, pdev: *mut libusb20_device) -> u8 {
        ffi::libusb20_dev_get_address(pdev)
    }

    unsafe fn dev_get_power_mode(&self, pdev: *mut libusb20_device) -> u8 {
        ffi::libusb20_dev_get_power_mode(pdev)
    }

    unsafe fn dev_set_power_mode(&self, pdev: *mut libusb20_device, power_mode: u8) -> c_int {
        ffi::libusb20_dev_set_power_mode(pdev, power_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only hosts without libusb20 run this; there the fallback never
    // produces a backend.
    #[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
    #[test]
    fn fallback_has_no_backend() {
        assert!(Libusb20.be_alloc_default().is_null());
    }

    #[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
    #[test]
    fn fallback_power_mode_is_a_single_byte() {
        let raw: u8 = unsafe { Libusb20.dev_get_power_mode(std::ptr::null_mut()) };
        assert_eq!(crate::PowerMode::from_raw(raw), Some(crate::PowerMode::On));
    }
}
