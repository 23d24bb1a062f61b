//! Unbounded report polling loop shared by the HID probe binaries

use tracing::warn;

use super::device::{RawHidDevice, REPORT_SIZE};
use super::report;

/// Read input reports forever, dumping each byte of every report to stdout.
///
/// There is no termination condition; the loop runs until the process is
/// killed. Read errors are reported and polling continues without backoff.
pub fn poll_reports(dev: &mut RawHidDevice) -> ! {
    let mut buffer = [0u8; REPORT_SIZE];

    loop {
        match dev.read_report(&mut buffer) {
            Ok(count) => {
                println!("Read {} bytes", count);
                for line in report::dump_lines(&buffer[..count]) {
                    println!("{}", line);
                }
            }
            Err(e) => {
                warn!("failed to read from {}: {}", dev.path().display(), e);
            }
        }
    }
}
