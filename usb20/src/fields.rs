use std::fmt;

use usb20_sys as ffi;

/// Whether a device is driven by a host controller or is the local device side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Host,
    Device,
}

impl Mode {
    pub fn from_raw(raw: u8) -> Option<Mode> {
        match raw {
            ffi::LIBUSB20_MODE_HOST => Some(Mode::Host),
            ffi::LIBUSB20_MODE_DEVICE => Some(Mode::Device),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            Mode::Host => ffi::LIBUSB20_MODE_HOST,
            Mode::Device => ffi::LIBUSB20_MODE_DEVICE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Host => "host",
            Mode::Device => "device",
        })
    }
}

/// Negotiated bus speed of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speed {
    Unknown,
    /// 1.5 Mbit/s
    Low,
    /// 12 Mbit/s
    Full,
    /// 480 Mbit/s
    High,
    /// Wireless USB
    Variable,
    /// 5 Gbit/s
    Super,
}

impl Speed {
    /// Values the header does not define read as `Unknown`.
    pub fn from_raw(raw: u8) -> Speed {
        match raw {
            ffi::LIBUSB20_SPEED_LOW => Speed::Low,
            ffi::LIBUSB20_SPEED_FULL => Speed::Full,
            ffi::LIBUSB20_SPEED_HIGH => Speed::High,
            ffi::LIBUSB20_SPEED_VARIABLE => Speed::Variable,
            ffi::LIBUSB20_SPEED_SUPER => Speed::Super,
            _ => Speed::Unknown,
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            Speed::Unknown => ffi::LIBUSB20_SPEED_UNKNOWN,
            Speed::Low => ffi::LIBUSB20_SPEED_LOW,
            Speed::Full => ffi::LIBUSB20_SPEED_FULL,
            Speed::High => ffi::LIBUSB20_SPEED_HIGH,
            Speed::Variable => ffi::LIBUSB20_SPEED_VARIABLE,
            Speed::Super => ffi::LIBUSB20_SPEED_SUPER,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Speed::Unknown => "unknown",
            Speed::Low => "low",
            Speed::Full => "full",
            Speed::High => "high",
            Speed::Variable => "variable",
            Speed::Super => "super",
        })
    }
}

/// Power state of a device as seen by its host controller driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerMode {
    Off,
    On,
    Save,
    Suspend,
    Resume,
}

impl PowerMode {
    pub fn from_raw(raw: u8) -> Option<PowerMode> {
        match raw {
            ffi::LIBUSB20_POWER_OFF => Some(PowerMode::Off),
            ffi::LIBUSB20_POWER_ON => Some(PowerMode::On),
            ffi::LIBUSB20_POWER_SAVE => Some(PowerMode::Save),
            ffi::LIBUSB20_POWER_SUSPEND => Some(PowerMode::Suspend),
            ffi::LIBUSB20_POWER_RESUME => Some(PowerMode::Resume),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            PowerMode::Off => ffi::LIBUSB20_POWER_OFF,
            PowerMode::On => ffi::LIBUSB20_POWER_ON,
            PowerMode::Save => ffi::LIBUSB20_POWER_SAVE,
            PowerMode::Suspend => ffi::LIBUSB20_POWER_SUSPEND,
            PowerMode::Resume => ffi::LIBUSB20_POWER_RESUME,
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PowerMode::Off => "off",
            PowerMode::On => "on",
            PowerMode::Save => "save",
            PowerMode::Suspend => "suspend",
            PowerMode::Resume => "resume",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_match_header() {
        assert_eq!(Mode::Host.as_raw(), 0);
        assert_eq!(Mode::Device.as_raw(), 1);
        assert_eq!(Speed::Unknown.as_raw(), 0);
        assert_eq!(Speed::Super.as_raw(), 5);
        assert_eq!(PowerMode::Off.as_raw(), 0);
        assert_eq!(PowerMode::Resume.as_raw(), 4);
    }

    #[test]
    fn out_of_range_values() {
        assert_eq!(Mode::from_raw(2), None);
        assert_eq!(PowerMode::from_raw(5), None);
        assert_eq!(Speed::from_raw(6), Speed::Unknown);
        assert_eq!(Speed::from_raw(3), Speed::High);
    }
}
