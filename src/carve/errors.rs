//! Custom error types for carving operations

use std::fmt;
use std::io;

/// Carving-specific error types
#[derive(Debug)]
pub enum CarveError {
    /// I/O error
    IoError(io::Error),
    /// Input path is neither a file nor a directory
    InvalidPath(String),
    /// Input file could not be read
    UnreadableInput(String, io::Error),
    /// Output directory or image file could not be written
    OutputWrite(String, io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarveError::IoError(e) => write!(f, "I/O error: {}", e),
            CarveError::InvalidPath(path) => write!(f, "Not a file or directory: {}", path),
            CarveError::UnreadableInput(path, e) => write!(f, "Cannot read input {}: {}", path, e),
            CarveError::OutputWrite(path, e) => write!(f, "Cannot write output {}: {}", path, e),
            CarveError::GenericError(msg) => write!(f, "Carving error: {}", msg),
        }
    }
}

impl std::error::Error for CarveError {}

impl From<io::Error> for CarveError {
    fn from(error: io::Error) -> Self {
        CarveError::IoError(error)
    }
}

impl From<String> for CarveError {
    fn from(msg: String) -> Self {
        CarveError::GenericError(msg)
    }
}

/// Result type for carving operations
pub type CarveResult<T> = Result<T, CarveError>;
