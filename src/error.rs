//! Centralized error handling for bginfo

use std::io;
use thiserror::Error;

/// Custom error type for bginfo operations
#[derive(Debug, Error)]
pub enum BginfoError {
    /// I/O errors (file reading, copying, saving)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Image decode/encode errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(String),
    /// A required identity variable is not set
    #[error("Configuration error: none of the environment variables {0} is set")]
    MissingVariable(String),
    /// Usage query failed for a single partition
    #[error("Storage query failed for {mount_point}: {source}")]
    StorageQuery {
        mount_point: String,
        #[source]
        source: io::Error,
    },
    /// Hostname, address or interface lookup failed
    #[error("Network resolution error: {0}")]
    NetworkResolution(String),
    /// The OS refused to set the desktop background
    #[error("Failed to set wallpaper with error code: {}: {message}", display_code(.code))]
    Apply { code: Option<i32>, message: String },
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Type alias for Results in bginfo
pub type Result<T> = std::result::Result<T, BginfoError>;
