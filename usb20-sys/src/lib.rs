//! Raw bindings to `libusb20`, the USB host library in the FreeBSD base system
//! (`<libusb20.h>`, linked as `-lusb`).
//!
//! Only the backend/device enumeration surface is declared here. Constants
//! carry the exact numeric values of the C header.
//!
//! On targets without libusb20 the same functions are provided by a fallback
//! that never produces a backend.
#![allow(non_camel_case_types)]

use libc::{c_char, c_int};

/// Opaque `struct libusb20_backend`.
#[repr(C)]
pub struct libusb20_backend {
    _private: [u8; 0],
}

/// Opaque `struct libusb20_device`.
#[repr(C)]
pub struct libusb20_device {
    _private: [u8; 0],
}

// enum libusb20_error
pub const LIBUSB20_SUCCESS: c_int = 0;
pub const LIBUSB20_ERROR_IO: c_int = -1;
pub const LIBUSB20_ERROR_INVALID_PARAM: c_int = -2;
pub const LIBUSB20_ERROR_ACCESS: c_int = -3;
pub const LIBUSB20_ERROR_NO_DEVICE: c_int = -4;
pub const LIBUSB20_ERROR_NOT_FOUND: c_int = -5;
pub const LIBUSB20_ERROR_BUSY: c_int = -6;
pub const LIBUSB20_ERROR_TIMEOUT: c_int = -7;
pub const LIBUSB20_ERROR_OVERFLOW: c_int = -8;
pub const LIBUSB20_ERROR_PIPE: c_int = -9;
pub const LIBUSB20_ERROR_INTERRUPTED: c_int = -10;
pub const LIBUSB20_ERROR_NO_MEM: c_int = -11;
pub const LIBUSB20_ERROR_NOT_SUPPORTED: c_int = -12;
pub const LIBUSB20_ERROR_OTHER: c_int = -99;

// enum libusb20_dev_mode
pub const LIBUSB20_MODE_HOST: u8 = 0;
pub const LIBUSB20_MODE_DEVICE: u8 = 1;

// enum libusb20_dev_speed
pub const LIBUSB20_SPEED_UNKNOWN: u8 = 0;
pub const LIBUSB20_SPEED_LOW: u8 = 1;
pub const LIBUSB20_SPEED_FULL: u8 = 2;
pub const LIBUSB20_SPEED_HIGH: u8 = 3;
pub const LIBUSB20_SPEED_VARIABLE: u8 = 4;
pub const LIBUSB20_SPEED_SUPER: u8 = 5;

// enum libusb20_dev_power_mode
pub const LIBUSB20_POWER_OFF: u8 = 0;
pub const LIBUSB20_POWER_ON: u8 = 1;
pub const LIBUSB20_POWER_SAVE: u8 = 2;
pub const LIBUSB20_POWER_SUSPEND: u8 = 3;
pub const LIBUSB20_POWER_RESUME: u8 = 4;

#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
extern "C" {
    pub fn libusb20_be_alloc_default() -> *mut libusb20_backend;
    pub fn libusb20_be_free(pbe: *mut libusb20_backend);
    pub fn libusb20_be_device_foreach(
        pbe: *mut libusb20_backend,
        pdev: *mut libusb20_device,
    ) -> *mut libusb20_device;

    pub fn libusb20_dev_get_backend_name(pdev: *mut libusb20_device) -> *const c_char;
    pub fn libusb20_dev_get_desc(pdev: *mut libusb20_device) -> *const c_char;
    pub fn libusb20_dev_open(pdev: *mut libusb20_device, transfer_max: u16) -> c_int;
    pub fn libusb20_dev_close(pdev: *mut libusb20_device) -> c_int;
    pub fn libusb20_dev_get_mode(pdev: *mut libusb20_device) -> u8;
    pub fn libusb20_dev_get_speed(pdev: *mut libusb20_device) -> u8;
    pub fn libusb20_dev_get_bus_number(pdev: *mut libusb20_device) -> u8;
    pub fn libusb20_dev_get_address(pdev: *mut libusb20_device) -> u8;
    pub fn libusb20_dev_get_power_mode(pdev: *mut libusb20_device) -> u8;
    pub fn libusb20_dev_set_power_mode(pdev: *mut libusb20_device, power_mode: u8) -> c_int;

    pub fn libusb20_error_name(code: c_int) -> *const c_char;
    pub fn libusb20_strerror(code: c_int) -> *const c_char;
}

#[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
mod unsupported;
#[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
pub use unsupported::*;
