//! Safe wrapper around `libusb20`, the USB host library of FreeBSD.
//!
//! ```no_run
//! let backend = usb20::Backend::allocate()?;
//! for device in backend.devices() {
//!     println!("{}: {}", device.backend_name(), device);
//! }
//! # Ok::<(), usb20::Error>(())
//! ```

pub use crate::backend::{Backend, Devices};
pub use crate::device::Device;
pub use crate::error::{Error, Result, Status};
pub use crate::fields::{Mode, PowerMode, Speed};
pub use crate::native::{Libusb20, Native};

mod backend;
mod device;
mod error;
mod fields;
mod native;

#[cfg(any(test, feature = "stub"))]
pub mod stub;
