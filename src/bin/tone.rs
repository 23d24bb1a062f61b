//! Generate a sine tone on an ALSA playback device.

use clap::Parser;

use cm1xx_probe::audio::playback::{self, ToneConfig};
use cm1xx_probe::logging::{self, LogLevel};

/// tone command line arguments
#[derive(Parser, Debug)]
#[command(name = "tone")]
#[command(version, about = "Generate a sine tone on an ALSA playback device", long_about = None)]
struct CliArgs {
    /// ALSA playback device name (e.g. "default" or "hw:0,0")
    #[arg(short = 'D', long, value_name = "NAME", default_value = "default")]
    device: String,

    /// Tone frequency in Hz
    #[arg(short = 'f', long, value_name = "HZ", default_value_t = 440.0)]
    frequency: f32,

    /// Playback duration in seconds
    #[arg(short = 't', long, value_name = "SECONDS", default_value_t = 5)]
    duration: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(args.log_level);

    let config = ToneConfig {
        device_name: args.device,
        frequency: args.frequency,
        duration_secs: args.duration,
        ..ToneConfig::default()
    };

    playback::play_tone(&config)?;
    Ok(())
}
