//! Error Types for genview
//!
//! A single error type covers startup configuration, log parsing and
//! lookups. Everything except `QueryNotFound` is fatal at startup.

use std::fmt;

/// Unified error type for genview operations
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Invalid command-line configuration
    ConfigError(String),
    /// Log file could not be read
    IoError(String),
    /// Malformed integer or numeric token in the log
    ParseError { line: usize, message: String },
    /// A record line appeared in a parser state that cannot accept it
    PreconditionError { line: usize, message: String },
    /// The generation used to compute bounds has no record
    MissingReferenceGeneration(i64),
    /// Requested generation absent or index out of range
    QueryNotFound { generation: i64, index: i64 },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ViewerError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ViewerError::ParseError { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            ViewerError::PreconditionError { line, message } => {
                write!(f, "Malformed log on line {}: {}", line, message)
            }
            ViewerError::MissingReferenceGeneration(generation) => write!(
                f,
                "Cannot compute bounds: generation {} has no record",
                generation
            ),
            ViewerError::QueryNotFound { generation, index } => write!(
                f,
                "No chromosome at generation {} index {}",
                generation, index
            ),
        }
    }
}

impl std::error::Error for ViewerError {}

/// Result type alias for genview operations
pub type Result<T> = std::result::Result<T, ViewerError>;

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::IoError(err.to_string())
    }
}

impl From<std::net::AddrParseError> for ViewerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ViewerError::ConfigError(format!("invalid listen address: {}", err))
    }
}
