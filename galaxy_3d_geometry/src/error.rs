//! Error types for the Galaxy3D geometry crate
//!
//! Intersection tests never fail: a miss is a result value, not an error.
//! These errors only come out of the fallible constructors (planes from
//! collinear points, rays without a direction, frustums built from a
//! degenerate matrix, out-of-range corner indices).

use std::fmt;

/// Result type for Galaxy3D geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input does not define the requested shape (zero-length normal,
    /// collinear points, zero direction)
    DegenerateGeometry(String),

    /// Argument outside of its valid domain
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error through the geometry logger, then hand it back.
///
/// Keeps the fallible constructors to a single `return Err(...)` line.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::geometry_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
