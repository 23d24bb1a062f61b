//! ALSA tone playback
//!
//! This module provides:
//! - Sine tone synthesis
//! - Blocking interleaved playback through an ALSA PCM device

pub mod playback;
pub mod tone;

pub use playback::{play_tone, ToneConfig};
