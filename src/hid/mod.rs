//! Raw HID register access
//!
//! CM1xx-style USB audio adapters map their GPIO registers into the HID
//! report space, so GPIO and button state can be exchanged by reading and
//! writing the hidraw node directly. No HID library layer is involved.
//!
//! Check /proc/asound to find which hidraw node belongs to the installed
//! card.

pub mod device;
pub mod poll;
pub mod report;

pub use device::{RawHidDevice, REPORT_SIZE};
pub use report::REGISTER_SELECT;
