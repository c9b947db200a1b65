//! Error types for the spatial library

use std::io;
use thiserror::Error;

/// Main error type for spatial operations
#[derive(Debug, Error)]
pub enum SpatialError {
    /// IO error while writing to a caller supplied sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Argument rejected by a constructor or comparison
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Value outside the recognized domain (e.g. unknown angle unit)
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Text does not match the expected grammar
    #[error("Format error: {0}")]
    Format(String),

    /// Malformed or unexpected XML
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type alias for spatial operations
pub type Result<T> = std::result::Result<T, SpatialError>;

impl From<String> for SpatialError {
    fn from(s: String) -> Self {
        SpatialError::Format(s)
    }
}

impl From<&str> for SpatialError {
    fn from(s: &str) -> Self {
        SpatialError::Format(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpatialError::InvalidArgument("zero length".to_string());
        assert_eq!(err.to_string(), "Invalid argument: zero length");

        let err = SpatialError::OutOfRange("grad".to_string());
        assert_eq!(err.to_string(), "Out of range: grad");
    }

    #[test]
    fn test_string_conversion() {
        let err: SpatialError = "bad pair".into();
        assert!(matches!(err, SpatialError::Format(ref s) if s == "bad pair"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "sink closed");
        let err: SpatialError = io_err.into();
        assert!(matches!(err, SpatialError::Io(_)));
    }
}
