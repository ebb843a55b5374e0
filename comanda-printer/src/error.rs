//! Error types for the printer library

use thiserror::Error;

/// Printer error types
///
/// Command building itself never fails; these cover ingestion of
/// caller-supplied data (configuration values, logo images).
#[derive(Debug, Error)]
pub enum PrintError {
    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Logo image could not be decoded
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Logo payload is not valid base64
    #[cfg(feature = "image")]
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
