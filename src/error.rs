//! Error types for pathplot.

use std::fmt;
use std::io;

/// The main error type for pathplot operations.
///
/// Geometry never fails; only configuration and file handling do.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (config loading, file writing)
    Io(io::Error),
    /// Malformed JSON input
    Json(serde_json::Error),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Dash pattern with a negative or non-finite entry
    InvalidDashPattern(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::Json(err) => write!(f, "JSON error: {}", err),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::InvalidDashPattern(msg) => write!(f, "Invalid dash pattern: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::Json(err)
    }
}

/// Result type alias for pathplot operations.
pub type PlotResult<T> = Result<T, PlotError>;
