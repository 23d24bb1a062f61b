//! Select a device register over HID, then poll for responses.
//!
//! Issues a single "Set Output Report" carrying the register-select payload,
//! then dumps every input report exactly like hid-poll. Runs until killed.
//! Typically needs root.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use cm1xx_probe::hid::device::RawHidDevice;
use cm1xx_probe::hid::poll;
use cm1xx_probe::hid::report::REGISTER_SELECT;
use cm1xx_probe::logging::{self, LogLevel};

/// hid-select command line arguments
#[derive(Parser, Debug)]
#[command(name = "hid-select")]
#[command(version, about = "Select a HID register, then dump input reports", long_about = None)]
struct CliArgs {
    /// Raw HID device node (check /proc/asound for the installed cards)
    #[arg(short = 'd', long, value_name = "PATH", default_value = "/dev/hidraw0")]
    device: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(args.log_level);

    let mut dev = RawHidDevice::open(&args.device)?;

    // One register-select write, reported but not fatal; responses arrive
    // through the ordinary input report stream.
    match dev.write_report(&REGISTER_SELECT) {
        Ok(written) => println!("Bytes written: {}", written),
        Err(e) => warn!("register select write failed: {}", e),
    }

    poll::poll_reports(&mut dev)
}
