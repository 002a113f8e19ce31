use std::fmt;

use libc::c_int;
use usb20_sys as ffi;

/// Result type of the libusb20 wrapper.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `libusb20_be_alloc_default` did not produce a backend.
    #[error("no backend found")]
    NoBackend,
    /// A native call failed with a known status.
    #[error("{0}")]
    Status(Status),
    /// A native call failed with a status libusb20 does not name.
    #[error("LIBUSB20_ERROR_UNKNOWN ({0}): Unknown error")]
    Unknown(c_int),
}

impl Error {
    /// Turns a native status into a result. `LIBUSB20_SUCCESS` is `Ok`.
    pub fn check(status: c_int) -> Result<()> {
        if status == ffi::LIBUSB20_SUCCESS {
            return Ok(());
        }
        Err(Status::from_code(status).map_or(Error::Unknown(status), Error::Status))
    }

    /// Native status code, if the error came from the library.
    pub fn code(&self) -> Option<c_int> {
        match self {
            Error::NoBackend => None,
            Error::Status(status) => Some(status.code()),
            Error::Unknown(code) => Some(*code),
        }
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Status(status)
    }
}

/// Failure statuses of `enum libusb20_error`.
///
/// Names and descriptions are the strings `libusb20_error_name` and
/// `libusb20_strerror` return, compiled in rather than looked up at runtime.
/// `LIBUSB20_SUCCESS` is not a failure and has no variant; [`Status::render`]
/// formats any raw code, success and unnamed codes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Input/output error
    Io = ffi::LIBUSB20_ERROR_IO,
    /// Invalid parameter
    InvalidParam = ffi::LIBUSB20_ERROR_INVALID_PARAM,
    /// Access denied (insufficient permissions)
    Access = ffi::LIBUSB20_ERROR_ACCESS,
    /// No such device (it may have been disconnected)
    NoDevice = ffi::LIBUSB20_ERROR_NO_DEVICE,
    /// Entity not found
    NotFound = ffi::LIBUSB20_ERROR_NOT_FOUND,
    /// Resource busy
    Busy = ffi::LIBUSB20_ERROR_BUSY,
    /// Operation timed out
    Timeout = ffi::LIBUSB20_ERROR_TIMEOUT,
    /// Overflow
    Overflow = ffi::LIBUSB20_ERROR_OVERFLOW,
    /// Pipe error
    Pipe = ffi::LIBUSB20_ERROR_PIPE,
    /// System call interrupted (perhaps due to signal)
    Interrupted = ffi::LIBUSB20_ERROR_INTERRUPTED,
    /// Insufficient memory
    NoMem = ffi::LIBUSB20_ERROR_NO_MEM,
    /// Operation not supported or unimplemented on this platform
    NotSupported = ffi::LIBUSB20_ERROR_NOT_SUPPORTED,
    /// Other error
    Other = ffi::LIBUSB20_ERROR_OTHER,
}

impl Status {
    pub const ALL: [Status; 13] = [
        Status::Io,
        Status::InvalidParam,
        Status::Access,
        Status::NoDevice,
        Status::NotFound,
        Status::Busy,
        Status::Timeout,
        Status::Overflow,
        Status::Pipe,
        Status::Interrupted,
        Status::NoMem,
        Status::NotSupported,
        Status::Other,
    ];

    /// `None` for `LIBUSB20_SUCCESS` and for codes outside the enum.
    pub fn from_code(code: c_int) -> Option<Status> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// `"{name} ({code}): {description}"` for any raw status code.
    pub fn render(code: c_int) -> String {
        match Status::from_code(code) {
            Some(status) => status.to_string(),
            None if code == ffi::LIBUSB20_SUCCESS => {
                format!("LIBUSB20_SUCCESS ({code}): Success")
            }
            None => format!("LIBUSB20_ERROR_UNKNOWN ({code}): Unknown error"),
        }
    }

    pub const fn code(self) -> c_int {
        self as c_int
    }

    pub const fn name(self) -> &'static str {
        match self {
            Status::Io => "LIBUSB20_ERROR_IO",
            Status::InvalidParam => "LIBUSB20_ERROR_INVALID_PARAM",
            Status::Access => "LIBUSB20_ERROR_ACCESS",
            Status::NoDevice => "LIBUSB20_ERROR_NO_DEVICE",
            Status::NotFound => "LIBUSB20_ERROR_NOT_FOUND",
            Status::Busy => "LIBUSB20_ERROR_BUSY",
            Status::Timeout => "LIBUSB20_ERROR_TIMEOUT",
            Status::Overflow => "LIBUSB20_ERROR_OVERFLOW",
            Status::Pipe => "LIBUSB20_ERROR_PIPE",
            Status::Interrupted => "LIBUSB20_ERROR_INTERRUPTED",
            Status::NoMem => "LIBUSB20_ERROR_NO_MEM",
            Status::NotSupported => "LIBUSB20_ERROR_NOT_SUPPORTED",
            Status::Other => "LIBUSB20_ERROR_OTHER",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Status::Io => "I/O error",
            Status::InvalidParam => "Invalid parameter",
            Status::Access => "Permissions error",
            Status::NoDevice => "No device",
            Status::NotFound => "Not found",
            Status::Busy => "Device busy",
            Status::Timeout => "Timeout",
            Status::Overflow => "Overflow",
            Status::Pipe => "Pipe error",
            Status::Interrupted => "Interrupted",
            Status::NoMem => "Out of memory",
            Status::NotSupported => "Not supported",
            Status::Other => "Other error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_renders_name_and_description() {
        for status in Status::ALL {
            assert!(!status.name().is_empty());
            assert!(!status.description().is_empty());
            assert_eq!(status.to_string(), status.to_string());
        }
    }

    #[test]
    fn codes_mirror_header_values() {
        assert_eq!(Status::Io.code(), -1);
        assert_eq!(Status::NotSupported.code(), -12);
        assert_eq!(Status::Other.code(), -99);
        assert_eq!(Status::from_code(-6), Some(Status::Busy));
        assert_eq!(Status::from_code(ffi::LIBUSB20_SUCCESS), None);
        assert_eq!(Status::from_code(-42), None);
    }

    #[test]
    fn check_maps_success_known_and_unknown() {
        assert_eq!(Error::check(0), Ok(()));
        assert_eq!(Error::check(-3), Err(Error::Status(Status::Access)));
        assert_eq!(Error::check(-42), Err(Error::Unknown(-42)));
        assert_eq!(Error::Unknown(-42).code(), Some(-42));
        assert_eq!(Error::NoBackend.code(), None);
    }

    #[test]
    fn render_covers_success_and_unnamed_codes() {
        assert_eq!(Status::render(0), "LIBUSB20_SUCCESS (0): Success");
        assert_eq!(Status::render(-6), "LIBUSB20_ERROR_BUSY (-6): Device busy");
        assert_eq!(Status::render(-42), Error::Unknown(-42).to_string());
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            Error::from(Status::Busy).to_string(),
            "LIBUSB20_ERROR_BUSY (-6): Device busy"
        );
        assert_eq!(Error::NoBackend.to_string(), "no backend found");
        assert_eq!(
            Error::Unknown(7).to_string(),
            "LIBUSB20_ERROR_UNKNOWN (7): Unknown error"
        );
    }

    #[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
    #[test]
    fn table_matches_native_library() {
        use std::ffi::CStr;

        for status in Status::ALL {
            let (name, desc) = unsafe {
                (
                    CStr::from_ptr(ffi::libusb20_error_name(status.code())),
                    CStr::from_ptr(ffi::libusb20_strerror(status.code())),
                )
            };
            assert_eq!(name.to_str(), Ok(status.name()));
            assert_eq!(desc.to_str(), Ok(status.description()));
        }
    }
}
