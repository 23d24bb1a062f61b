//! cm1xx-probe - diagnostic probes for CM1xx-style USB audio adapters
//!
//! This crate provides the shared pieces behind three small host-side tools:
//! - `tone`: sine playback through an ALSA device
//! - `hid-poll`: dump raw HID input reports from a hidraw node
//! - `hid-select`: select a device register, then dump input reports

pub mod audio;
pub mod error;
pub mod hid;
pub mod logging;

pub use error::{AppError, Result};
