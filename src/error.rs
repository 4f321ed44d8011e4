//! Error types for sugerir operations.
//!
//! The engine never fails for "no data" conditions; those degrade to empty
//! result sequences. Errors are reserved for caller bugs (invalid
//! hyperparameters, dimension mismatches) and I/O faults surfaced by the
//! corpus loader internals.

use std::fmt;

/// Main error type for sugerir operations.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::InvalidHyperparameter {
///     param: "limit".to_string(),
///     value: "0".to_string(),
///     constraint: "limit > 0".to_string(),
/// };
/// assert!(err.to_string().contains("limit"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter or argument value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SugerirError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            SugerirError::Io(e) => write!(f, "I/O error: {e}"),
            SugerirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SugerirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SugerirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SugerirError {
    fn from(e: std::io::Error) -> Self {
        SugerirError::Io(e)
    }
}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::Other(msg.to_string())
    }
}

impl From<String> for SugerirError {
    fn from(msg: String) -> Self {
        SugerirError::Other(msg)
    }
}

/// Convenience result type for sugerir operations.
pub type Result<T> = std::result::Result<T, SugerirError>;
