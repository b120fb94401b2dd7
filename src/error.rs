//! # Error Types
//!
//! Custom error types for gamepad-shield using `thiserror`.

use thiserror::Error;

/// Main error type for gamepad-shield
#[derive(Debug, Error)]
pub enum GamepadShieldError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gamepad-shield
pub type Result<T> = std::result::Result<T, GamepadShieldError>;
