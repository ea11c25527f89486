//! Error types for pattern, board and round generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A bounded retry loop ran out before producing a valid result
    ///
    /// Raised when a single pattern cannot satisfy its live-cell bounds, or
    /// when no set of mutually distant patterns can be assembled.
    GenerationExhausted {
        /// Which generation step gave up
        stage: &'static str,
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// Decoy patterns still occur on the board after sanitization
    ///
    /// Only returned when the configured policy refuses such boards.
    UnresolvedConflict {
        /// Anchors where a decoy still matches
        remaining: usize,
        /// Sanitizer passes that were run
        passes: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationExhausted { stage, attempts } => {
                write!(f, "Generation exhausted in {stage} after {attempts} attempts")
            }
            Self::UnresolvedConflict { remaining, passes } => {
                write!(
                    f,
                    "{remaining} decoy occurrence(s) left on the board after {passes} sanitizer passes"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl GenerationError {
    /// Whether this error is the soft residual-conflict condition
    pub const fn is_unresolved_conflict(&self) -> bool {
        matches!(self, Self::UnresolvedConflict { .. })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
