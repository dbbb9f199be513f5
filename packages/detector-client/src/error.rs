//! Error types for the detector client.

use thiserror::Error;

/// Result type for detector client operations.
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Detector client errors.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// Configuration error (bad base URL, invalid timeout)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response from the detector service)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
