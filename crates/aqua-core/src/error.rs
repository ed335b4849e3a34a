//! Error types for chart aggregation
//!
//! Provides a unified error type for all aqua-charts crates.

use thiserror::Error;

/// Core error type for chart aggregation and drawing
#[derive(Error, Debug)]
pub enum Error {
    /// Input data or a parameter the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A drawing surface rejected a drawing call
    #[error("Render error: {0}")]
    Render(String),

    /// Serialized input could not be decoded
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error (for writing rendered output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidArgument(format!("{operation} requires at least one sample"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidArgument(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidArgument(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a count or size parameter that must be positive
    pub fn zero_parameter(name: &str) -> Self {
        Self::InvalidArgument(format!("{name} must be greater than zero"))
    }

    /// Whether this error reports bad caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
