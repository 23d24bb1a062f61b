//! Blocking ALSA tone playback

use alsa::pcm::{Access, Format, HwParams};
use alsa::{Direction, ValueOr, PCM};
use tracing::{info, warn};

use super::tone;
use crate::error::{AppError, Result};

/// Tone playback configuration
#[derive(Debug, Clone)]
pub struct ToneConfig {
    /// ALSA device name (e.g., "hw:0,0" or "default")
    pub device_name: String,
    /// Requested sample rate in Hz (the driver picks the nearest supported)
    pub sample_rate: u32,
    /// Requested channel count (the driver picks the nearest supported)
    pub channels: u32,
    /// Frames synthesized per write
    pub buffer_frames: usize,
    /// Tone frequency in Hz
    pub frequency: f32,
    /// Peak amplitude, kept well below i16 full scale to avoid clipping
    pub amplitude: f32,
    /// Playback duration in seconds
    pub duration_secs: u64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            device_name: "default".to_string(),
            sample_rate: 44100,
            channels: 2,
            buffer_frames: 4096,
            frequency: 440.0,
            amplitude: 10000.0,
            duration_secs: 5,
        }
    }
}

/// Open the playback device, negotiate hardware parameters, and play the tone.
///
/// Write failures are not fatal: each one triggers a single hardware-state
/// reset and the loop continues. The device is drained before release so the
/// tail of the tone is audible.
pub fn play_tone(config: &ToneConfig) -> Result<()> {
    let pcm = PCM::new(&config.device_name, Direction::Playback, false).map_err(|e| {
        AppError::AudioError(format!(
            "Failed to open audio device {}: {}",
            config.device_name, e
        ))
    })?;

    // Configure hardware parameters, keeping whatever the driver negotiates
    let (rate, channels) = {
        let hwp = HwParams::any(&pcm)
            .map_err(|e| AppError::AudioError(format!("Failed to get HwParams: {}", e)))?;

        hwp.set_access(Access::RWInterleaved)
            .map_err(|e| AppError::AudioError(format!("Failed to set access: {}", e)))?;

        hwp.set_format(Format::S16LE)
            .map_err(|e| AppError::AudioError(format!("Failed to set format: {}", e)))?;

        let rate = hwp
            .set_rate_near(config.sample_rate, ValueOr::Nearest)
            .map_err(|e| AppError::AudioError(format!("Failed to set sample rate: {}", e)))?;

        let channels = hwp
            .set_channels_near(config.channels)
            .map_err(|e| AppError::AudioError(format!("Failed to set channels: {}", e)))?;

        pcm.hw_params(&hwp)
            .map_err(|e| AppError::AudioError(format!("Failed to apply hw params: {}", e)))?;

        (rate, channels)
    };

    if rate != config.sample_rate || channels != config.channels {
        info!(
            "device negotiated {}Hz {}ch (requested {}Hz {}ch)",
            rate, channels, config.sample_rate, config.channels
        );
    }

    info!(
        "playing {}Hz tone on {} for {}s at {}Hz {}ch",
        config.frequency, config.device_name, config.duration_secs, rate, channels
    );

    let io = pcm
        .io_i16()
        .map_err(|e| AppError::AudioError(format!("Failed to get PCM IO: {}", e)))?;

    // Buffer sized by the negotiated channel count, not the requested one
    let mut buffer = vec![0i16; config.buffer_frames * channels as usize];
    let iterations = config.duration_secs * u64::from(rate) / config.buffer_frames as u64;

    for i in 0..iterations {
        let start_frame = i * config.buffer_frames as u64;
        tone::fill_interleaved(
            &mut buffer,
            channels as usize,
            start_frame,
            config.frequency,
            config.amplitude,
            rate,
        );

        if let Err(e) = io.writei(&buffer) {
            warn!("write failed ({}), resetting device state", e);
            let _ = pcm.prepare();
        }
    }

    // Let whatever is still queued in the driver play out before closing
    if let Err(e) = pcm.drain() {
        warn!("drain failed: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToneConfig::default();
        assert_eq!(config.device_name, "default");
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert_eq!(config.buffer_frames, 4096);
        assert_eq!(config.frequency, 440.0);
        assert_eq!(config.amplitude, 10000.0);
        assert_eq!(config.duration_secs, 5);
    }

    #[test]
    fn test_amplitude_leaves_headroom() {
        let config = ToneConfig::default();
        assert!(config.amplitude < f32::from(i16::MAX));
    }
}
