use std::fmt;
use std::iter::FusedIterator;
use std::ptr::{self, NonNull};

use log::{debug, trace};
use usb20_sys::{libusb20_backend, libusb20_device};

use crate::device::Device;
use crate::error::{Error, Result};
use crate::native::{Libusb20, Native};

/// A libusb20 backend: the enumeration context for the host's USB devices.
///
/// The native context is freed exactly once, by [`Backend::release`] or when
/// the backend is dropped. A backend is neither `Send` nor `Sync`.
pub struct Backend<N: Native = Libusb20> {
    native: N,
    raw: NonNull<libusb20_backend>,
    cursor: *mut libusb20_device,
    exhausted: bool,
}

impl Backend<Libusb20> {
    /// Allocates the system's default backend.
    pub fn allocate() -> Result<Self> {
        Self::with_native(Libusb20)
    }
}

impl<N: Native> Backend<N> {
    /// Allocates the default backend of `native`.
    pub fn with_native(native: N) -> Result<Self> {
        let raw = NonNull::new(native.be_alloc_default()).ok_or(Error::NoBackend)?;
        debug!("allocated libusb20 backend {:p}", raw);
        Ok(Backend {
            native,
            raw,
            cursor: ptr::null_mut(),
            exhausted: false,
        })
    }

    /// Advances the cursor to the next device. Returns `false` once the
    /// enumeration is done, and keeps returning `false` after that.
    pub fn scan(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.cursor = unsafe { self.native.be_device_foreach(self.raw.as_ptr(), self.cursor) };
        if self.cursor.is_null() {
            trace!("backend {:p}: enumeration exhausted", self.raw);
            self.exhausted = true;
            return false;
        }
        trace!("backend {:p}: cursor at {:p}", self.raw, self.cursor);
        true
    }

    /// The device under the cursor, `None` before the first successful
    /// [`scan`](Backend::scan) and after the last one.
    pub fn current_device(&self) -> Option<Device<'_, N>> {
        NonNull::new(self.cursor).map(|raw| Device::new(&self.native, raw))
    }

    /// Starts a fresh enumeration pass, independent of the cursor used by
    /// [`scan`](Backend::scan).
    pub fn devices(&self) -> Devices<'_, N> {
        Devices {
            backend: self,
            cursor: ptr::null_mut(),
            done: false,
        }
    }

    /// Frees the native context.
    pub fn release(self) {
        drop(self)
    }
}

impl<N: Native> Drop for Backend<N> {
    fn drop(&mut self) {
        unsafe { self.native.be_free(self.raw.as_ptr()) };
        debug!("released libusb20 backend {:p}", self.raw);
    }
}

impl<N: Native> fmt::Debug for Backend<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("raw", &self.raw)
            .field("cursor", &self.cursor)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// One enumeration pass over a backend's devices. See [`Backend::devices`].
pub struct Devices<'a, N: Native = Libusb20> {
    backend: &'a Backend<N>,
    cursor: *mut libusb20_device,
    done: bool,
}

impl<'a, N: Native> Iterator for Devices<'a, N> {
    type Item = Device<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let backend = self.backend;
        self.cursor = unsafe {
            backend
                .native
                .be_device_foreach(backend.raw.as_ptr(), self.cursor)
        };
        match NonNull::new(self.cursor) {
            Some(raw) => Some(Device::new(&backend.native, raw)),
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<N: Native> FusedIterator for Devices<'_, N> {}
