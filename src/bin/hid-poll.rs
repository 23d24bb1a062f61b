//! Poll input reports from a raw HID device node and dump every byte.
//!
//! The device generates a report whenever its status changes (button press,
//! GPIO toggle), so this is the quickest way to watch a CM1xx adapter's
//! GPIO activity. Runs until killed. Typically needs root.

use std::path::PathBuf;

use clap::Parser;

use cm1xx_probe::hid::device::RawHidDevice;
use cm1xx_probe::hid::poll;
use cm1xx_probe::logging::{self, LogLevel};

/// hid-poll command line arguments
#[derive(Parser, Debug)]
#[command(name = "hid-poll")]
#[command(version, about = "Dump raw HID input reports from a device node", long_about = None)]
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
    poll::poll_reports(&mut dev)
}
