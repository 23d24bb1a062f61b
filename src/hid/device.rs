//! Raw HID device node access

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppError, Result};

/// Maximum input report size accepted per read
pub const REPORT_SIZE: usize = 64;

/// A raw HID device node opened for blocking read/write access
#[derive(Debug)]
pub struct RawHidDevice {
    path: PathBuf,
    file: File,
}

impl RawHidDevice {
    /// Open the device node read/write in blocking mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| AppError::HidError {
                device: path.display().to_string(),
                reason: format!("failed to open: {}", e),
            })?;

        debug!("opened HID device {}", path.display());
        Ok(Self { path, file })
    }

    /// Device node path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the device delivers an input report.
    ///
    /// Returns the byte count the kernel handed back, which may be shorter
    /// than the buffer for devices with small report descriptors.
    pub fn read_report(&mut self, buf: &mut [u8; REPORT_SIZE]) -> Result<usize> {
        self.file.read(&mut buf[..]).map_err(|e| AppError::HidError {
            device: self.path.display().to_string(),
            reason: format!("read failed: {}", e),
        })
    }

    /// Send one output report to the device, returning the written count.
    pub fn write_report(&mut self, payload: &[u8]) -> Result<usize> {
        self.file.write(payload).map_err(|e| AppError::HidError {
            device: self.path.display().to_string(),
            reason: format!("write failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::report::REGISTER_SELECT;

    #[test]
    fn test_open_missing_device_fails() {
        let err = RawHidDevice::open("/dev/hidraw-does-not-exist").unwrap_err();
        assert!(matches!(err, AppError::HidError { .. }));
    }

    #[test]
    fn test_write_report_payload_reaches_device() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut dev = RawHidDevice::open(file.path()).unwrap();

        let written = dev.write_report(&REGISTER_SELECT).unwrap();
        assert_eq!(written, 4);
        assert_eq!(std::fs::read(file.path()).unwrap(), vec![48, 0, 0, 3]);
    }

    #[test]
    fn test_read_report_returns_short_count() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0x30, 0x00, 0x00, 0x03, 0xFF]).unwrap();
        let mut dev = RawHidDevice::open(file.path()).unwrap();

        let mut buf = [0u8; REPORT_SIZE];
        let count = dev.read_report(&mut buf).unwrap();
        assert_eq!(count, 5);
        assert_eq!(&buf[..5], &[0x30, 0x00, 0x00, 0x03, 0xFF]);
    }
}
