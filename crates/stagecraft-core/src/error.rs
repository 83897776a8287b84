//! Error types for Stagecraft

use thiserror::Error;

/// The main error type for Stagecraft operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StageError {
    #[error("Texture not found: {0}")]
    TextureNotFound(String),

    #[error("Texture decode error: {path}: {reason}")]
    TextureDecode { path: String, reason: String },

    #[error("Texture load cancelled: {0}")]
    LoadCancelled(String),

    #[error("Scheduler error: {0}")]
    SchedulerError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for Stagecraft operations
pub type Result<T> = std::result::Result<T, StageError>;

impl From<std::io::Error> for StageError {
    fn from(err: std::io::Error) -> Self {
        StageError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for StageError {
    fn from(err: toml::de::Error) -> Self {
        StageError::TomlParseError(err.to_string())
    }
}
