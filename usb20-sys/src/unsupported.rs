// Fallback for targets without libusb20: no backend can ever be allocated, so
// the device entry points are unreachable through a valid backend and answer
// with NOT_SUPPORTED or zero.

use super::*;

pub unsafe fn libusb20_be_alloc_default() -> *mut libusb20_backend {
    std::ptr::null_mut()
}

pub unsafe fn libusb20_be_free(_pbe: *mut libusb20_backend) {}

pub unsafe fn libusb20_be_device_foreach(
    _pbe: *mut libusb20_backend,
    _pdev: *mut libusb20_device,
) -> *mut libusb20_device {
    std::ptr::null_mut()
}

pub unsafe fn libusb20_dev_get_backend_name(_pdev: *mut libusb20_device) -> *const c_char {
    std::ptr::null()
}

pub unsafe fn libusb20_dev_get_desc(_pdev: *mut libusb20_device) -> *const c_char {
    std::ptr::null()
}

pub unsafe fn libusb20_dev_open(_pdev: *mut libusb20_device, _transfer_max: u16) -> c_int {
    LIBUSB20_ERROR_NOT_SUPPORTED
}

pub unsafe fn libusb20_dev_close(_pdev: *mut libusb20_device) -> c_int {
    LIBUSB20_ERROR_NOT_SUPPORTED
}

pub unsafe fn libusb20_dev_get_mode(_pdev: *mut libusb20_device) -> u8 {
    LIBUSB20_MODE_HOST
}

pub unsafe fn libusb20_dev_get_speed(_pdev: *mut libusb20_device) -> u8 {
    LIBUSB20_SPEED_UNKNOWN
}

pub unsafe fn libusb20_dev_get_bus_number(_pdev: *mut libusb20_device) -> u8 {
    0
}

pub unsafe fn libusb20_dev_get_address(_pdev: *mut libusb20_device) -> u8 {
    0
}

pub unsafe fn libusb20_dev_get_power_mode(_pdev: *mut libusb20_device) -> u8 {
    LIBUSB20_POWER_ON
}

pub unsafe fn libusb20_dev_set_power_mode(_pdev: *mut libusb20_device, _power_mode: u8) -> c_int {
    LIBUSB20_ERROR_NOT_SUPPORTED
}

pub unsafe fn libusb20_error_name(_code: c_int) -> *const c_char {
    std::ptr::null()
}

pub unsafe fn libusb20_strerror(_code: c_int) -> *const c_char {
    std::ptr::null()
}
