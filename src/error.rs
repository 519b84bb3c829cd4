//! Error types for Pomoglow
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Pomoglow
#[derive(Debug, Error)]
pub enum PomoglowError {
    /// The alarm asset could not be read or decoded
    #[error("Alarm asset error: {0}")]
    AlarmAsset(String),

    /// No usable audio output device, or playback setup failed
    #[error("Audio device error: {0}")]
    AudioDevice(String),

    /// A duration field in the settings form failed validation
    #[error("Invalid {field} duration: {reason}")]
    InvalidDuration {
        /// Which settings row the bad value belongs to
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pomoglow operations
pub type Result<T> = std::result::Result<T, PomoglowError>;
