use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Audio error: {0}")]
    AudioError(String),

    #[error("HID error [{device}]: {reason}")]
    HidError { device: String, reason: String },
}

/// Result type alias for the probe tools
pub type Result<T> = std::result::Result<T, AppError>;
