//! Error types for the face shape recognition library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark set has the wrong number of points
    #[error("Invalid landmarks: expected {expected} points, got {actual}")]
    InvalidLandmarks {
        expected: usize,
        actual: usize,
    },

    /// A width measurement collapsed to zero, so a ratio is undefined
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Operation attempted in a session state that does not allow it
    #[error("Session state violation: {0}")]
    SessionStateViolation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
